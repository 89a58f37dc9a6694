//! Engine-order labels injected around the dial face.
//!
//! The labels belong to one mounted widget: they are laid out when it
//! mounts and taken off the face when it is torn down.

use glam::Vec2;
use telegraph_core::{label_offset, TelegraphPosition, LABEL_RADIUS_PX};

/// Where labels are drawn. The web view implements this over the face element.
pub trait LabelHost {
    type Node;

    /// Remove labels left on the face by an earlier mount.
    fn clear_stale(&self);
    fn insert(&self, position: TelegraphPosition, offset: Vec2) -> Option<Self::Node>;
    fn remove(&self, node: &Self::Node);
}

pub struct DialLabels<H: LabelHost> {
    host: H,
    nodes: Vec<H::Node>,
}

impl<H: LabelHost> DialLabels<H> {
    pub fn place(host: H) -> Self {
        host.clear_stale();
        let nodes = TelegraphPosition::ALL
            .into_iter()
            .filter_map(|p| host.insert(p, label_offset(p.angle(), LABEL_RADIUS_PX)))
            .collect();
        Self { host, nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<H: LabelHost> Drop for DialLabels<H> {
    fn drop(&mut self) {
        for node in self.nodes.drain(..) {
            self.host.remove(&node);
        }
    }
}
