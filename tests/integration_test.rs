use missionloc::extract::WINDOW_TITLE_PLACEHOLDER;
use missionloc::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// A briefing with every structure the walker cares about: both description
/// variants, a template condition outside any stop, two numbered conditions,
/// a gamepad window, an image element, and an unrelated stringId-ish
/// attribute that must survive everything.
const MISSION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Ridge assault briefing -->
<mission name="ridge_assault">
	<name stringId="">Opening Moves</name>
	<description type="short" stringId="">Take the ridge before dawn.</description>
	<description type="long" stringId="">Take the ridge before dawn and hold it until relieved.</description>
	<settings difficulty="veteran"/>
	<templates>
		<condition stringId="LEGACY-CHECK" description="Template bank, never renumbered"/>
	</templates>
	<stop>
		<conditions>
			<condition stringId="" expandedStringId="" description="Reach the ridge" expandedDescription="Climb the east slope.">
				<window stringId="" titleStringId="">
					<page>
						<element type="text" stringId="">Move out.</element>
						<element type="image" image="textures/map_far.png"/>
						<element type="text" stringId="">Stay low.</element>
					</page>
				</window>
				<window gamepad="true" stringId="">
					<page>
						<element type="text" stringId="">Press A to advance.</element>
					</page>
				</window>
			</condition>
			<condition stringId="" description="Hold until relieved">
				<window stringId="" dropdownCompareStringId="KEEP-ME">
					<page>
						<element type="text" stringId="">Dig in.</element>
					</page>
				</window>
			</condition>
		</conditions>
	</stop>
</mission>
"#;

/// `MISSION` after one assignment run with base `CAMP-C001-M001`.
const ASSIGNED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Ridge assault briefing -->
<mission name="ridge_assault">
	<name stringId="CAMP-C001-M001TITL">Opening Moves</name>
	<description type="short" stringId="CAMP-C001-M001DESS">Take the ridge before dawn.</description>
	<description type="long" stringId="CAMP-C001-M001DESL">Take the ridge before dawn and hold it until relieved.</description>
	<settings difficulty="veteran"/>
	<templates>
		<condition stringId="LEGACY-CHECK" description="Template bank, never renumbered"/>
	</templates>
	<stop>
		<conditions>
			<condition stringId="CAMP-C001-M001S001" expandedStringId="CAMP-C001-M001S001-EXPA" description="Reach the ridge" expandedDescription="Climb the east slope.">
				<window stringId="CAMP-C001-M001S001-INFO" titleStringId="CAMP-C001-M001S001-ITIT">
					<page>
						<element type="text" stringId="CAMP-C001-M001S001-I001">Move out.</element>
						<element type="image" image="textures/map_far.png"/>
						<element type="text" stringId="CAMP-C001-M001S001-I002">Stay low.</element>
					</page>
				</window>
				<window gamepad="true" stringId="CAMP-C001-M001S001-GPAD">
					<page>
						<element type="text" stringId="CAMP-C001-M001S001-G001">Press A to advance.</element>
					</page>
				</window>
			</condition>
			<condition stringId="CAMP-C001-M001S002" description="Hold until relieved">
				<window stringId="CAMP-C001-M001S002-INFO" dropdownCompareStringId="KEEP-ME">
					<page>
						<element type="text" stringId="CAMP-C001-M001S002-I001">Dig in.</element>
					</page>
				</window>
			</condition>
		</conditions>
	</stop>
</mission>
"#;

fn base() -> IdentifierBase {
    IdentifierBase::new("CAMP-C001-M001").unwrap()
}

#[test]
fn test_assign_full_mission_document() {
    let (output, summary) = assign_text(MISSION, &base()).unwrap();

    assert_eq!(output, ASSIGNED);
    assert_eq!(
        summary,
        AssignSummary {
            names: 1,
            descriptions: 2,
            conditions: 3,
            windows: 4,
            elements: 4,
        }
    );
    assert_eq!(summary.total(), 14);
}

#[test]
fn test_assign_deterministic_and_idempotent() {
    let (first, first_summary) = assign_text(MISSION, &base()).unwrap();
    let (again, again_summary) = assign_text(MISSION, &base()).unwrap();
    assert_eq!(first, again);
    assert_eq!(first_summary, again_summary);

    let (second, second_summary) = assign_text(&first, &base()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_summary, second_summary);
}

#[test]
fn test_briefing_chain_tokens() {
    let source = r#"<mission>
	<stop>
		<conditions>
			<condition stringId="">
				<window stringId="" titleStringId="">
					<page>
						<element type="text" stringId="">Advance.</element>
					</page>
				</window>
			</condition>
		</conditions>
	</stop>
</mission>"#;

    let (output, _) = assign_text(source, &base()).unwrap();
    let doc = parse_mission(&output).unwrap();
    let mission = doc.root_element().unwrap();
    let stop = mission.child_elements_named("stop").next().unwrap();
    let conditions = stop.child_elements_named("conditions").next().unwrap();
    let condition = conditions.child_elements_named("condition").next().unwrap();
    let window = condition.child_elements_named("window").next().unwrap();
    let page = window.child_elements_named("page").next().unwrap();
    let element = page.child_elements_named("element").next().unwrap();

    assert_eq!(condition.attr("stringId"), Some("CAMP-C001-M001S001"));
    assert_eq!(window.attr("stringId"), Some("CAMP-C001-M001S001-INFO"));
    assert_eq!(window.attr("titleStringId"), Some("CAMP-C001-M001S001-ITIT"));
    assert_eq!(element.attr("stringId"), Some("CAMP-C001-M001S001-I001"));
}

#[test]
fn test_clear_blanks_every_family_attribute() {
    let (cleared, count) = clear_text(ASSIGNED).unwrap();

    // Clearing the assigned document reproduces the pristine fixture, except
    // the template condition's id is blanked too.
    let expected = MISSION.replace(r#"stringId="LEGACY-CHECK""#, r#"stringId="""#);
    assert_eq!(cleared, expected);
    assert_eq!(count, 15);
    assert!(cleared.contains(r#"dropdownCompareStringId="KEEP-ME""#));
}

#[test]
fn test_extraction_order_over_full_document() {
    let doc = parse_mission(ASSIGNED).unwrap();
    let entries: Vec<ExtractedEntry> = extract_entries(&doc).collect();

    let ids: Vec<&str> = entries.iter().map(|e| e.string_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "CAMP-C001-M001TITL",
            "CAMP-C001-M001DESS",
            "CAMP-C001-M001DESL",
            "CAMP-C001-M001S001",
            "CAMP-C001-M001S001-EXPA",
            "CAMP-C001-M001S001-ITIT",
            "CAMP-C001-M001S001-I001",
            "CAMP-C001-M001S001-I002",
            "CAMP-C001-M001S001-G001",
            "CAMP-C001-M001S002",
            "CAMP-C001-M001S002-I001",
        ]
    );

    assert_eq!(entries[0].text, "Opening Moves");
    assert_eq!(entries[3].text, "Reach the ridge");
    assert_eq!(entries[4].text, "Climb the east slope.");
    assert_eq!(entries[5].text, WINDOW_TITLE_PLACEHOLDER);
    assert_eq!(entries[8].text, "Press A to advance.");
}

#[test]
fn test_export_line_for_simple_name() {
    let source = "<mission>\n\t<name stringId=\"CAMP-TITL\">Hello</name>\n</mission>";
    let doc = parse_mission(source).unwrap();

    let sheet = render_sheet(extract_entries(&doc), SheetLanguage::English);
    assert_eq!(sheet, "CAMP-TITL\t\tHello");
}

#[test]
fn test_import_replaces_text_and_reconciles_clean() {
    let source = "<mission>\n\t<name stringId=\"CAMP-TITL\">Hello</name>\n</mission>";
    let table = TranslationTable::from_entries([("CAMP-TITL", "Hallo")]);

    let (output, outcome) = merge_text(source, &table).unwrap();
    assert_eq!(
        output,
        "<mission>\n\t<name stringId=\"CAMP-TITL\">Hallo</name>\n</mission>"
    );
    assert_eq!(outcome.summary.replaced, 1);
    assert!(outcome.report.is_empty());
}

#[test]
fn test_import_sheet_with_leading_path_column() {
    let source = "<mission>\n\t<name stringId=\"CAMP-TITL\">Hello</name>\n\t<description type=\"short\" stringId=\"CAMP-DESS\">Short text</description>\n</mission>";
    let payload = "maps/mission_02.xml\tCAMP-TITL\tHallo\t\nmaps/mission_02.xml\tCAMP-DESS\tKurz\tBrief";

    let table = TranslationTable::parse_sheet(payload).unwrap();
    let (output, outcome) = merge_text(source, &table).unwrap();

    // German fills the empty English cell; English wins otherwise.
    assert!(output.contains(">Hallo<"));
    assert!(output.contains(">Brief<"));
    assert_eq!(outcome.summary.replaced, 2);
    assert!(outcome.report.is_empty());
}

#[test]
fn test_sheet_round_trip_is_stable_for_multiline_text() {
    let source = "<mission><stop><conditions><condition stringId=\"\"><window stringId=\"\"><page><element type=\"text\" stringId=\"\">Hold the line.\nWait for the flare.</element></page></window></condition></conditions></stop></mission>";
    let (assigned, _) = assign_text(source, &base()).unwrap();

    let doc = parse_mission(&assigned).unwrap();
    let before: Vec<ExtractedEntry> = extract_entries(&doc).collect();
    let element_entry = before
        .iter()
        .find(|e| e.string_id == "CAMP-C001-M001S001-I001")
        .unwrap();
    assert_eq!(element_entry.text, "Hold the line.\\nWait for the flare.");

    // Paste the exported row straight back in as a German column.
    let row = format!("{}\t{}", element_entry.string_id, element_entry.text);
    let table = TranslationTable::parse_sheet(&row).unwrap();
    let (merged, outcome) = merge_text(&assigned, &table).unwrap();
    assert_eq!(outcome.summary.replaced, 1);
    assert!(merged.contains(">\nHold the line.\nWait for the flare.\n</element>"));

    // Extracting the merged document yields the same cell text again.
    let merged_doc = parse_mission(&merged).unwrap();
    let after: Vec<ExtractedEntry> = extract_entries(&merged_doc).collect();
    assert_eq!(before, after);
}

#[test]
fn test_parse_serialize_is_lossless() {
    let doc = parse_mission(MISSION).unwrap();
    assert_eq!(serialize_mission(&doc), MISSION);

    let exotic = "<?xml version=\"1.0\"?>\n<mission>\n\t<script><![CDATA[if (a < b) { run(); }]]></script>\n\t<?editor fold?>\n</mission>\n";
    let doc = parse_mission(exotic).unwrap();
    assert_eq!(serialize_mission(&doc), exotic);
}

#[test]
fn test_cli_file_workflow() {
    use missionloc::cli::commands;

    let dir = tempdir().unwrap();
    let path = dir.path().join("mission_02.xml");
    std::fs::write(&path, MISSION).unwrap();

    // Assign with the base derived from the file name.
    commands::assign::execute(&path, None, None).unwrap();
    let assigned = std::fs::read_to_string(&path).unwrap();
    assert!(assigned.contains(r#"stringId="MISS-MI02S001-INFO""#));

    let tsv = dir.path().join("export.tsv");
    commands::export::execute(&path, SheetLanguage::German, false, Some(&tsv)).unwrap();
    let sheet = std::fs::read_to_string(&tsv).unwrap();
    assert!(sheet.starts_with("MISS-MI02TITL\tOpening Moves"));

    // Import a single translated row; everything else lands in the report.
    let translated = dir.path().join("translated.tsv");
    std::fs::write(&translated, "MISS-MI02TITL\tEr\u{f6}ffnungsz\u{fc}ge\t\n").unwrap();
    let report = dir.path().join("missing.md");
    commands::import::execute(&path, Some(&translated), None, Some(&report)).unwrap();

    let merged = std::fs::read_to_string(&path).unwrap();
    assert!(merged.contains(">Er\u{f6}ffnungsz\u{fc}ge<"));

    let report_text = std::fs::read_to_string(&report).unwrap();
    assert!(report_text.starts_with("# Missing StringIds"));
    assert!(report_text.contains("MISS-MI02DESS"));
    assert!(report_text.contains("LEGACY-CHECK"));

    // Clearing leaves no tokens behind but keeps unrelated attributes.
    commands::clear::execute(&path, None).unwrap();
    let cleared = std::fs::read_to_string(&path).unwrap();
    assert!(!cleared.contains("MISS-MI02"));
    assert!(cleared.contains(r#"dropdownCompareStringId="KEEP-ME""#));
}

#[test]
fn test_cli_rejects_non_xml_files() {
    use missionloc::cli::commands;

    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not a mission").unwrap();

    assert!(commands::assign::execute(&path, Some("CAMP-C001-M001"), None).is_err());
}

#[test]
fn test_cli_cleanup_commands() {
    use missionloc::cli::commands;

    let dir = tempdir().unwrap();

    let path = dir.path().join("mission_03.xml");
    std::fs::write(
        &path,
        "<mission>\n\t<element image=\"textures\\ui\\icon.png\"/>\n</mission>\n",
    )
    .unwrap();
    commands::cleanup::backslashes(&path, None).unwrap();
    let cleaned = std::fs::read_to_string(&path).unwrap();
    assert!(cleaned.contains("textures/ui/icon.png"));

    let windows = dir.path().join("mission_04.xml");
    std::fs::write(
        &windows,
        "<mission>\n\t<window stringId=\"W-0001\">Briefing text.</window>\n</mission>\n",
    )
    .unwrap();
    commands::cleanup::dynamic_height(&windows, None).unwrap();
    let converted = std::fs::read_to_string(&windows).unwrap();
    assert!(converted.contains("dynamicHeight=\"true\""));
    assert!(converted.contains("maxHeight=\"810\""));
    assert!(converted.contains("<page>"));
}
