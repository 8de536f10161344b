// Invariant tests for the linked priority queue

use prioq_core::{Priority, StringTask};
use prioq_queue::PriorityQueue;
use proptest::prelude::*;

fn tasks(priorities: &[i32]) -> Vec<StringTask> {
    priorities
        .iter()
        .enumerate()
        .map(|(index, &p)| StringTask::new(format!("task-{index}"), p))
        .collect()
}

fn is_descending(queue: &PriorityQueue<StringTask>) -> bool {
    let priorities: Vec<Priority> = queue.iter().map(|task| task.priority).collect();
    priorities.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Expected chain order: stable sort by descending priority.
fn stable_order(tasks: &[StringTask]) -> Vec<String> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|task| std::cmp::Reverse(task.priority));
    sorted.into_iter().map(|task| task.text).collect()
}

fn multiset(queue: &PriorityQueue<StringTask>) -> Vec<(Priority, String)> {
    let mut items: Vec<_> = queue
        .iter()
        .map(|task| (task.priority, task.text.clone()))
        .collect();
    items.sort();
    items
}

fn priority_list() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..48)
}

proptest! {
    #[test]
    fn enque_keeps_chain_sorted_and_counted(priorities in priority_list()) {
        let mut queue = PriorityQueue::new();
        for (inserted, task) in tasks(&priorities).into_iter().enumerate() {
            queue.enque(task);
            prop_assert!(is_descending(&queue));
            prop_assert_eq!(queue.len(), inserted + 1);
            prop_assert_eq!(queue.iter().count(), queue.len());
        }
    }

    #[test]
    fn ties_are_served_in_insertion_order(priorities in priority_list()) {
        let input = tasks(&priorities);
        let queue = PriorityQueue::from_tasks(input.clone());

        let chain: Vec<String> = queue.iter().map(|task| task.text.clone()).collect();
        prop_assert_eq!(chain, stable_order(&input));
    }

    #[test]
    fn deque_drains_in_chain_order(priorities in priority_list()) {
        let input = tasks(&priorities);
        let mut queue = PriorityQueue::from_tasks(input.clone());
        let expected = stable_order(&input);

        let mut drained = Vec::new();
        while let Some(head) = queue.peek().cloned() {
            let removed = queue.deque();
            prop_assert_eq!(removed.as_ref(), Some(&head));
            prop_assert_eq!(queue.iter().count(), queue.len());
            drained.push(head.text);
        }

        prop_assert_eq!(drained, expected);
        prop_assert!(queue.is_empty());
        prop_assert!(queue.deque().is_none());
    }

    #[test]
    fn change_priority_keeps_invariants(
        priorities in priority_list(),
        old in -20i32..20,
        new in -25i32..25,
    ) {
        let mut queue = PriorityQueue::from_tasks(tasks(&priorities));
        let before = queue.clone();

        let found = queue.change_priority(Priority::from(old), Priority::from(new));

        prop_assert_eq!(found, priorities.contains(&old));
        prop_assert_eq!(queue.len(), priorities.len());
        prop_assert_eq!(queue.iter().count(), queue.len());
        prop_assert!(is_descending(&queue));
        if !found {
            prop_assert_eq!(&queue, &before);
        }
    }

    #[test]
    fn concatenation_is_sorted_in_either_order(
        left in priority_list(),
        right in priority_list(),
    ) {
        let a = PriorityQueue::from_tasks(tasks(&left));
        let b: PriorityQueue<StringTask> = tasks(&right)
            .into_iter()
            .map(|mut task| {
                task.text = format!("other-{}", task.text);
                task
            })
            .collect();

        let ab = &a + &b;
        let ba = &b + &a;

        prop_assert!(is_descending(&ab));
        prop_assert!(is_descending(&ba));
        prop_assert_eq!(ab.len(), left.len() + right.len());
        prop_assert_eq!(multiset(&ab), multiset(&ba));
    }

    #[test]
    fn equality_matches_chain_comparison(
        left in priority_list(),
        right in priority_list(),
    ) {
        let a = PriorityQueue::from_tasks(tasks(&left));
        let b = PriorityQueue::from_tasks(tasks(&right));

        let same_chain = a.iter().eq(b.iter());
        prop_assert_eq!(a == b, same_chain);
        prop_assert_eq!(a == b, b == a);
    }
}

#[test]
fn round_trip_example_order() {
    let queue = PriorityQueue::from_tasks(tasks(&[3, 1, 4, 1, 5]));

    let order: Vec<f64> = queue.iter().map(|task| task.priority.value()).collect();
    assert_eq!(order, vec![5.0, 4.0, 3.0, 1.0, 1.0]);
    assert_eq!(queue.to_string(), "[task-4 (5), task-2 (4), task-0 (3), task-1 (1), task-3 (1)]");
}

#[test]
fn distinct_priorities_compare_equal_regardless_of_insertion_order() {
    let forward = PriorityQueue::from_tasks(tasks(&[1, 2, 3]));
    let backward: PriorityQueue<StringTask> = tasks(&[1, 2, 3]).into_iter().rev().collect();

    assert_eq!(forward, backward);
}

#[test]
fn deque_then_peek_exposes_next_task() {
    let mut queue = PriorityQueue::from_tasks(tasks(&[2, 7]));
    let first = queue.peek().cloned();

    assert_eq!(queue.deque(), first);
    assert_eq!(queue.peek().map(StringTask::text), Some("task-0"));
}
