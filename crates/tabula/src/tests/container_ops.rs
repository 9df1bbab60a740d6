use alloc::string::ToString;

use crate::{Key, Table, TableError, Value, combine, intersect, table};

#[test]
fn filled_repeats_the_initial_value() {
    let t = Table::filled(3, &Value::from("x"));
    assert!(t.equals(&table!["x", "x", "x"]));
}

#[test]
fn filled_rejects_bad_arguments() {
    assert!(Table::filled(0, &Value::from("x")).is_empty());
    assert!(Table::filled(-1, &Value::from("x")).is_empty());
    assert!(Table::filled(3, &Value::Absent).is_empty());
}

#[test]
fn combine_concatenates_arrays() {
    let a = Value::Table(table![1, 2]);
    let b = Value::Table(table![3]);
    let combined = combine(&a, &b).unwrap();
    assert!(combined.is_array());
    assert!(combined.equals(&table![1, 2, 3]));
}

#[test]
fn combine_merges_mappings_with_right_bias() {
    let a = Value::Table(table! { "a" => 1, "b" => 2 });
    let b = Value::Table(table! { "b" => 9, "c" => 3 });
    let combined = combine(&a, &b).unwrap();
    assert!(combined.equals(&table! { "a" => 1, "b" => 9, "c" => 3 }));
}

#[test]
fn combine_appends_array_values_after_a_mapping() {
    let a = Value::Table(table! { "x" => 1 });
    let b = Value::Table(table![7, 8]);
    let combined = combine(&a, &b).unwrap();
    assert_eq!(combined.len(), 3);
    assert_eq!(combined.get(&Key::from("x")), Some(&Value::from(1)));
    assert_eq!(combined.get(&Key::Integer(1)), Some(&Value::from(7)));
    assert_eq!(combined.get(&Key::Integer(2)), Some(&Value::from(8)));
}

#[test]
fn combine_rejects_non_tables() {
    let err = combine(&Value::Integer(1), &Value::Table(Table::new())).unwrap_err();
    assert_eq!(err, TableError::NotATable { found: "integer" });

    let err = combine(&Value::Table(Table::new()), &Value::from("no")).unwrap_err();
    assert_eq!(err, TableError::NotATable { found: "text" });
}

#[test]
fn intersect_arrays_by_value_in_left_order() {
    let a = Value::Table(table![1, 2, 3, 4]);
    let b = Value::Table(table![3, 4, 5]);
    let out = intersect(&a, &b).unwrap();
    assert!(out.equals(&table![3, 4]));
}

#[test]
fn intersect_mappings_by_key_and_value() {
    let a = Value::Table(table! { "a" => 1, "b" => 2, "c" => 3 });
    let b = Value::Table(table! { "a" => 1, "b" => 9, "d" => 3 });
    let out = intersect(&a, &b).unwrap();
    assert!(out.equals(&table! { "a" => 1 }));
}

#[test]
fn intersect_rejects_non_tables() {
    let err = intersect(&Value::Boolean(true), &Value::Table(Table::new())).unwrap_err();
    assert_eq!(err, TableError::NotATable { found: "boolean" });
}

#[test]
fn flip_swaps_keys_and_values() {
    let flipped = table! { "a" => 1, "b" => 2 }.flipped();
    assert_eq!(flipped.get(&Key::Integer(1)), Some(&Value::from("a")));
    assert_eq!(flipped.get(&Key::Integer(2)), Some(&Value::from("b")));
}

#[test]
fn flip_keeps_the_last_writer_on_collision() {
    let flipped = table! { "a" => 1, "b" => 1 }.flipped();
    assert_eq!(flipped.len(), 1);
    assert_eq!(flipped.get(&Key::Integer(1)), Some(&Value::from("b")));
}

#[test]
fn flip_skips_unkeyable_values() {
    let mut t = Table::new();
    t.set(Key::from("x"), Value::Float(1.5));
    t.set(Key::from("y"), Value::Absent);
    t.set(Key::from("z"), Value::Table(Table::new()));
    assert!(t.flipped().is_empty());
}

#[test]
fn reverse_flips_positional_order() {
    assert!(table![1, 2, 3].reversed().equals(&table![3, 2, 1]));
}

#[test]
fn reverse_of_a_mapping_is_empty() {
    assert!(table! { "a" => 1 }.reversed().is_empty());
}

#[test]
fn push_then_pop_restores_the_array() {
    let original = table![1, 2];
    let mut t = original.clone();
    assert!(t.push(Value::from(9)));
    assert_eq!(t.pop(), Value::from(9));
    assert!(t.equals(&original));
}

#[test]
fn push_fails_on_a_mapping() {
    let mut t = table! { "a" => 1 };
    assert!(!t.push(Value::from(2)));
    assert_eq!(t.len(), 1);
}

#[test]
fn pop_returns_absent_when_empty_or_mapping() {
    assert_eq!(Table::new().pop(), Value::Absent);
    assert_eq!(table! { "a" => 1 }.pop(), Value::Absent);
}

#[test]
fn pop_removes_key_n_even_when_insertion_was_permuted() {
    let mut t = Table::new();
    t.set(Key::Integer(2), Value::from("b"));
    t.set(Key::Integer(1), Value::from("a"));
    assert_eq!(t.pop(), Value::from("b"));
    assert!(t.equals(&table!["a"]));
}

#[test]
fn find_value_returns_the_first_matching_key() {
    let t = table! { "a" => 1, "b" => 2, "c" => 2 };
    assert_eq!(t.find_value(&Value::from(2)), Some(&Key::from("b")));
    assert_eq!(t.find_value(&Value::from(5)), None);
}

#[test]
fn contains_key_matches_exactly() {
    let t = table! { "a" => 1, 2 => "b" };
    assert!(t.contains_key(&Key::from("a")));
    assert!(t.contains_key(&Key::Integer(2)));
    assert!(!t.contains_key(&Key::from("2")));
}

#[test]
fn equals_compares_textually() {
    assert!(table![1, 2].equals(&table!["1", "2"]));
    assert!(!table![1, 2].equals(&table![1]));
    assert!(!table![1, 2].equals(&table![2, 1]));
}

#[test]
fn equals_on_mappings_ignores_entry_order() {
    let a = table! { "a" => 1, "b" => 2 };
    let b = table! { "b" => 2, "a" => 1 };
    assert!(a.equals(&b));
}

#[test]
fn set_replaces_in_place_and_remove_shifts_down() {
    let mut t = table! { "a" => 1, "b" => 2, "c" => 3 };
    t.set(Key::from("a"), Value::from(9));
    let keys: alloc::vec::Vec<_> = t.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, [Key::from("a"), Key::from("b"), Key::from("c")]);

    t.remove(&Key::from("b"));
    let keys: alloc::vec::Vec<_> = t.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, [Key::from("a"), Key::from("c")]);
}

#[test]
fn display_renders_arrays_and_mappings() {
    assert_eq!(table![1, 2].to_string(), "[1, 2]");
    assert_eq!(table! { "a" => 1 }.to_string(), "{a=1}");
    assert_eq!(Value::Table(table![true, "x"]).to_string(), "[true, x]");
}
