use euclid::default::Point2D;
use flowgraph::{NodeId, NodeLabel, WorkflowApp};

pub(crate) struct TestHarness {
    pub(crate) app: WorkflowApp,
}

impl TestHarness {
    pub(crate) fn new() -> Self {
        Self {
            app: WorkflowApp::new(),
        }
    }

    pub(crate) fn add_node(&mut self, label: NodeLabel) -> NodeId {
        self.add_node_at(label, 0.0, 0.0)
    }

    pub(crate) fn add_node_at(&mut self, label: NodeLabel, x: f32, y: f32) -> NodeId {
        self.app.add_node(label, Point2D::new(x, y))
    }

    /// Point the context surface at a node, as a right-click would.
    pub(crate) fn target(&mut self, id: NodeId) {
        self.app.set_context_target(Some(id));
    }
}
