use std::collections::HashSet;
use taskpad_core::{Todo, TodoId, TodoList};

fn sample(text: &str, order: i64) -> Todo {
    Todo::new(text, order)
}

#[test]
fn next_order_on_empty_collection_is_one() {
    let todos = TodoList::new();
    assert_eq!(todos.next_order(), 1);
}

#[test]
fn next_order_is_max_plus_one() {
    let mut todos = TodoList::new();
    todos.add(sample("a", 2));
    todos.add(sample("b", 7));
    todos.add(sample("c", 4));

    assert_eq!(todos.next_order(), 8);
}

#[test]
fn add_keeps_order_non_decreasing() {
    let mut todos = TodoList::new();
    todos.add(sample("third", 3));
    todos.add(sample("first", 1));
    todos.add(sample("second", 2));

    let orders: Vec<i64> = todos.iter().map(|todo| todo.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn equal_orders_keep_insertion_sequence() {
    let mut todos = TodoList::new();
    let first = sample("first", 1);
    let second = sample("second", 1);
    let first_id = first.id;
    let second_id = second.id;

    todos.add(first);
    todos.add(second);

    let ids: Vec<TodoId> = todos.iter().map(|todo| todo.id).collect();
    assert_eq!(ids, vec![first_id, second_id]);
}

#[test]
fn reset_replaces_content_and_sorts() {
    let mut todos = TodoList::new();
    todos.add(sample("stale", 9));

    todos.reset(vec![sample("b", 2), sample("a", 1)]);

    assert_eq!(todos.len(), 2);
    let orders: Vec<i64> = todos.iter().map(|todo| todo.order).collect();
    assert_eq!(orders, vec![1, 2]);
}

#[test]
fn done_and_remaining_partition_the_collection() {
    let mut todos = TodoList::new();
    let mut finished = sample("done already", 1);
    finished.toggle();
    todos.add(finished);
    todos.add(sample("open", 2));
    todos.add(sample("also open", 3));

    let done_ids: HashSet<TodoId> = todos.done().iter().map(|todo| todo.id).collect();
    let remaining_ids: HashSet<TodoId> = todos.remaining().iter().map(|todo| todo.id).collect();
    let all_ids: HashSet<TodoId> = todos.iter().map(|todo| todo.id).collect();

    assert!(done_ids.is_disjoint(&remaining_ids));
    let union: HashSet<TodoId> = done_ids.union(&remaining_ids).copied().collect();
    assert_eq!(union, all_ids);
    assert_eq!(done_ids.len(), 1);
    assert_eq!(remaining_ids.len(), 2);
}

#[test]
fn remove_removes_exactly_that_record() {
    let mut todos = TodoList::new();
    let keep = sample("keep", 1);
    let drop = sample("drop", 2);
    let keep_id = keep.id;
    let drop_id = drop.id;
    todos.add(keep);
    todos.add(drop);

    let removed = todos.remove(drop_id).expect("record should be removed");
    assert_eq!(removed.id, drop_id);
    assert_eq!(todos.len(), 1);
    assert!(todos.get(keep_id).is_some());
    assert!(todos.get(drop_id).is_none());
}

#[test]
fn remove_unknown_id_returns_none() {
    let mut todos = TodoList::new();
    todos.add(sample("only", 1));

    assert!(todos.remove(uuid::Uuid::new_v4()).is_none());
    assert_eq!(todos.len(), 1);
}

#[test]
fn get_mut_allows_in_place_mutation() {
    let mut todos = TodoList::new();
    let todo = sample("rename me", 1);
    let id = todo.id;
    todos.add(todo);

    todos.get_mut(id).expect("record exists").text = "renamed".to_string();
    assert_eq!(todos.get(id).expect("record exists").text, "renamed");
}
