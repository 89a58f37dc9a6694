// Host-side tests for the dial label lifecycle.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/labels.rs"]
mod labels;

use glam::Vec2;
use labels::*;
use std::cell::RefCell;
use std::rc::Rc;
use telegraph_core::{TelegraphPosition, LABEL_RADIUS_PX};

// Stands in for the dial face: the keys of the label children it holds.
#[derive(Clone, Default)]
struct FakeFace {
    children: Rc<RefCell<Vec<(usize, &'static str)>>>,
    next_id: Rc<RefCell<usize>>,
}

impl LabelHost for FakeFace {
    type Node = usize;

    fn clear_stale(&self) {
        self.children.borrow_mut().clear();
    }

    fn insert(&self, position: TelegraphPosition, offset: Vec2) -> Option<usize> {
        assert!((offset.length() - LABEL_RADIUS_PX).abs() < 1e-3);
        let mut id = self.next_id.borrow_mut();
        *id += 1;
        self.children.borrow_mut().push((*id, position.key()));
        Some(*id)
    }

    fn remove(&self, node: &usize) {
        self.children.borrow_mut().retain(|(id, _)| id != node);
    }
}

#[test]
fn places_one_label_per_position_in_order() {
    let face = FakeFace::default();
    let labels = DialLabels::place(face.clone());
    assert_eq!(labels.len(), 10);
    let keys: Vec<_> = face.children.borrow().iter().map(|(_, k)| *k).collect();
    let expected: Vec<_> = TelegraphPosition::ALL.iter().map(|p| p.key()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn teardown_removes_the_labels() {
    let face = FakeFace::default();
    let labels = DialLabels::place(face.clone());
    assert_eq!(face.children.borrow().len(), 10);
    drop(labels);
    assert!(face.children.borrow().is_empty());
}

#[test]
fn remounting_does_not_accumulate_labels() {
    let face = FakeFace::default();
    for _ in 0..3 {
        let labels = DialLabels::place(face.clone());
        assert_eq!(face.children.borrow().len(), 10);
        drop(labels);
    }
    assert!(face.children.borrow().is_empty());

    // a mount that was never torn down leaves its labels behind
    let leaked = DialLabels::place(face.clone());
    std::mem::forget(leaked);
    let _fresh = DialLabels::place(face.clone());
    assert_eq!(face.children.borrow().len(), 10);
}
