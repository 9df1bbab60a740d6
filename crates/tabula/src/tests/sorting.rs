use crate::{Order, Value, table};

#[test]
fn ascending_orders_smallest_first() {
    let mut t = table![5, 3, 1, 4, 2];
    t.sort(Order::Ascending);
    assert!(t.equals(&table![1, 2, 3, 4, 5]));
}

#[test]
fn descending_orders_largest_first() {
    let mut t = table![5, 3, 1, 4, 2];
    t.sort(Order::Descending);
    assert!(t.equals(&table![5, 4, 3, 2, 1]));
}

#[test]
fn integers_and_floats_compare_numerically() {
    let mut t = table![2.5, 2, 3, 0.5];
    t.sort(Order::Ascending);
    assert!(t.equals(&table![0.5, 2, 2.5, 3]));
}

#[test]
fn numbers_sort_before_text() {
    let mut t = table!["b", 10, "a", 2];
    t.sort(Order::Ascending);
    assert!(t.equals(&table![2, 10, "a", "b"]));
}

#[test]
fn permuted_insertion_order_sorts_by_key_index() {
    use crate::{Key, Table};

    let mut t = Table::new();
    t.set(Key::Integer(2), Value::from(1));
    t.set(Key::Integer(1), Value::from(3));
    t.set(Key::Integer(3), Value::from(2));
    t.sort(Order::Ascending);
    assert!(t.equals(&table![1, 2, 3]));
}

#[test]
fn mapping_input_is_returned_unchanged() {
    let mut t = table! { "b" => 2, "a" => 1 };
    let before = t.clone();
    t.sort(Order::Ascending);
    assert_eq!(t, before);
    assert!(!t.is_array());
}

#[test]
fn custom_comparator_drives_the_order() {
    let mut t = table!["ccc", "a", "bb"];
    // Swap when the left text is longer: shortest first.
    t.sort_by(|a, b| match (a, b) {
        (Value::Text(a), Value::Text(b)) => a.len() > b.len(),
        _ => false,
    });
    assert!(t.equals(&table!["a", "bb", "ccc"]));
}

#[cfg(feature = "std")]
#[test]
fn shuffle_preserves_the_values() {
    use alloc::string::ToString;

    fastrand::seed(7);
    let mut t = table![1, 2, 3, 4, 5];
    t.sort(Order::Shuffled);
    assert!(t.is_array());
    assert_eq!(t.len(), 5);

    let mut seen: alloc::vec::Vec<_> = t.iter().map(|(_, v)| v.to_string()).collect();
    seen.sort();
    assert_eq!(seen, ["1", "2", "3", "4", "5"]);
}
