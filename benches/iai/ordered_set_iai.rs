//! IAI-Callgrind benchmark for OrderedSet.
//!
//! Measures instruction counts for bulk construction and for positional
//! operations on sets of 100, 10000 and 100000 members.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ordset::{OrderedSet, Position};
use std::hint::black_box;

fn setup_set(size: u32) -> OrderedSet<u32> {
    OrderedSet::from_values(0..size)
}

fn setup_vec(size: u32) -> Vec<u32> {
    (0..size).collect()
}

#[library_benchmark]
#[bench::size_100(setup_vec(100))]
#[bench::size_10000(setup_vec(10000))]
#[bench::size_100000(setup_vec(100000))]
fn from_values(elements: Vec<u32>) -> OrderedSet<u32> {
    black_box(OrderedSet::from_values(black_box(elements)))
}

#[library_benchmark]
#[bench::size_100(setup_set(100))]
#[bench::size_10000(setup_set(10000))]
#[bench::size_100000(setup_set(100000))]
fn insert_after_front(mut set: OrderedSet<u32>) -> OrderedSet<u32> {
    let value = u32::try_from(set.len()).unwrap_or(u32::MAX);
    black_box(set.insert(black_box(value), &0, Position::After)).ok();
    set
}

#[library_benchmark]
#[bench::size_100(setup_set(100))]
#[bench::size_10000(setup_set(10000))]
#[bench::size_100000(setup_set(100000))]
fn move_front_to_back(mut set: OrderedSet<u32>) -> OrderedSet<u32> {
    black_box(set.move_to_back(black_box(&0)));
    set
}

#[library_benchmark]
#[bench::size_100(setup_set(100))]
#[bench::size_10000(setup_set(10000))]
#[bench::size_100000(setup_set(100000))]
fn remove_front(mut set: OrderedSet<u32>) -> OrderedSet<u32> {
    black_box(set.remove(black_box(&0)));
    set
}

library_benchmark_group!(
    name = ordered_set_group;
    benchmarks = from_values, insert_after_front, move_front_to_back, remove_front
);

main!(library_benchmark_groups = ordered_set_group);
