use crate::constants::{
    banner_colors, builtin_tables, render_python, weekdays, ConstantTable, ConstantValue,
};
use crate::Error;

#[test]
fn string_keys() {
    let table = ConstantTable::new("FLAGS")
        .exported()
        .entry("show_weekends", true)
        .entry("max_lanes", 4i64)
        .entry("theme", "dark");

    assert_eq!(
        table.python_source().unwrap(),
        "FLAGS = {\n    'show_weekends': True,\n    'max_lanes': 4,\n    'theme': 'dark',\n}\n",
    );
}

#[test]
fn invalid_int_key() {
    let table = ConstantTable::new("BROKEN").with_int_key().entry("one", 1);

    assert!(matches!(
        table.python_source(),
        Err(Error::InvalidConstantKey { table: "BROKEN", key }) if key == "one",
    ));
}

#[test]
fn empty_table() {
    assert_eq!(ConstantTable::new("EMPTY").python_source().unwrap(), "EMPTY = {\n}\n");
}

#[test]
fn banner_palette() {
    let table = banner_colors();
    assert!(table.export_to_python);
    assert!(table.int_key);
    assert_eq!(table.entries.len(), 16);
    assert_eq!(table.entries[0].0, "0");
    assert_eq!(table.entries[15].1, ConstantValue::from("banner-color-15"));
}

#[test]
fn only_exported_tables() {
    let source = render_python(&builtin_tables()).unwrap();
    assert!(source.starts_with("# Generated by export_constants, do not edit.\n"));
    assert!(source.contains("BANNER_COLORS = {\n    0: 'banner-color-0',\n"));
    assert!(source.contains("    15: 'banner-color-15',\n}\n"));
    assert!(!source.contains("WEEKDAYS"));

    let source = render_python([&weekdays().exported()]).unwrap();
    assert!(source.contains("WEEKDAYS = {\n    0: 'Sunday',\n"));
}
