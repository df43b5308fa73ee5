//! Ordering model for tasks within a column and for columns on the board.
//!
//! Task order is a dense, zero-based integer rank per column. Moves and
//! reorders always leave the destination column dense; deletes may leave gaps
//! that the next [`normalize`] (or move into that column) closes.
//!
//! Sorting is by `order` ascending with ties broken by position in the task
//! collection. Equal orders should not occur, but a stable sort keeps the
//! result deterministic when they do.

use crate::types::{ColumnId, Task, TaskId};

/// Indices into `tasks` of the tasks in `status`, in display order.
pub fn column_indices(tasks: &[Task], status: &ColumnId) -> Vec<usize> {
    let mut indices: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| &t.status == status)
        .map(|(i, _)| i)
        .collect();
    // sort_by_key is stable, so equal orders keep their array position
    indices.sort_by_key(|&i| tasks[i].order);
    indices
}

/// Ids of the tasks in `status`, in display order.
pub fn column_sequence(tasks: &[Task], status: &ColumnId) -> Vec<TaskId> {
    column_indices(tasks, status)
        .into_iter()
        .map(|i| tasks[i].id.clone())
        .collect()
}

/// Reassign `order = rank` for every task in `status`.
///
/// Returns how many tasks had their order changed.
pub fn normalize(tasks: &mut [Task], status: &ColumnId) -> usize {
    let mut changed = 0;
    for (rank, index) in column_indices(tasks, status).into_iter().enumerate() {
        let rank = rank as i64;
        if tasks[index].order != rank {
            tasks[index].order = rank;
            changed += 1;
        }
    }
    changed
}

/// The order a task appended to `status` should receive: one past the
/// current maximum, or 0 for an empty column.
pub fn next_order(tasks: &[Task], status: &ColumnId) -> i64 {
    tasks
        .iter()
        .filter(|t| &t.status == status)
        .map(|t| t.order)
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

/// Check the dense ordering invariant: the orders in `status` are exactly
/// `0..n`, each once.
pub fn is_dense(tasks: &[Task], status: &ColumnId) -> bool {
    let mut orders: Vec<i64> = tasks
        .iter()
        .filter(|t| &t.status == status)
        .map(|t| t.order)
        .collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(i, &o)| o == i as i64)
}

/// Move the element at `from` to `to`, shifting the elements in between.
///
/// Out-of-range indices leave the slice untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
