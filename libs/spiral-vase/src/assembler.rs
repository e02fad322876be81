//! # Topology Assembler
//!
//! Drives sampling layer by layer and emits every primitive to a
//! [`MeshBuilder`].
//!
//! ## Algorithm
//!
//! ```text
//! Start → SamplingLayer(0) → ... → SamplingLayer(layers-1) → Capping → Done
//! ```
//!
//! 1. Each layer adds its `samples_per_layer` vertices in sample order, then
//!    the ring edges (closing back to the first sample). Every undirected
//!    edge is emitted once: with one or two samples the closing edge would
//!    repeat an existing edge or loop on itself, so it is left out
//! 2. From layer 1 on, each sample is tied to the one below it and a quad is
//!    emitted per sample against the previous ring
//! 3. Capping closes layer 0 and the last layer with one n-gon each
//!
//! Only the first, previous and current rings are kept; the builder owns
//! everything else.
//!
//! ## Orientation
//!
//! Samples run clockwise seen from above. With layers stacked upwards the
//! outward side quad is `[(l-1,i), (l-1,i-1), (l,i-1), (l,i)]`, the bottom
//! cap takes layer 0 in sample order and the top cap takes the last layer
//! reversed. A negative layer height mirrors the stack, so every face flips.

use crate::builder::MeshBuilder;
use crate::error::VaseError;
use crate::params::VaseParams;
use crate::sampler::LayerSampler;
use tracing::{debug, trace};

/// Progress of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// Nothing emitted yet
    Start,
    /// The given layer is sampled next
    SamplingLayer(usize),
    /// All layers emitted, caps pending
    Capping,
    /// Every primitive emitted
    Done,
}

/// Direction the layers are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stacking {
    Up,
    Down,
}

impl Stacking {
    fn for_layer_height(layer_height: f64) -> Self {
        if layer_height < 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Step-wise assembler over a single builder.
///
/// Most callers want [`assemble`]; stepping is exposed so hosts can observe
/// progress.
///
/// # Example
///
/// ```rust
/// use spiral_vase::assembler::{AssemblyState, TopologyAssembler};
/// use spiral_vase::builder::PolygonMeshBuilder;
/// use spiral_vase::VaseParams;
///
/// let params = VaseParams { layers: 2, samples_per_layer: 6, ..VaseParams::default() };
/// let mut assembler = TopologyAssembler::new(&params, PolygonMeshBuilder::new()).unwrap();
/// assert_eq!(assembler.step(), AssemblyState::SamplingLayer(0));
/// assert_eq!(assembler.step(), AssemblyState::SamplingLayer(1));
/// assert_eq!(assembler.step(), AssemblyState::Capping);
/// assert_eq!(assembler.step(), AssemblyState::Done);
///
/// let mesh = assembler.finish();
/// assert_eq!(mesh.face_count(), 6 + 2);
/// ```
pub struct TopologyAssembler<'a, B: MeshBuilder> {
    params: &'a VaseParams,
    builder: B,
    state: AssemblyState,
    layers: usize,
    samples: usize,
    stacking: Stacking,
    first_ring: Vec<B::VertexRef>,
    previous_ring: Vec<B::VertexRef>,
    current_ring: Vec<B::VertexRef>,
}

impl<'a, B: MeshBuilder> TopologyAssembler<'a, B> {
    /// Validates `params` and prepares a run.
    ///
    /// # Errors
    ///
    /// Any [`VaseParams::validate`] failure. Nothing has been emitted to the
    /// builder at that point.
    pub fn new(params: &'a VaseParams, builder: B) -> Result<Self, VaseError> {
        params.validate()?;
        let samples = params.sample_count();
        Ok(Self {
            params,
            builder,
            state: AssemblyState::Start,
            layers: params.layer_count(),
            samples,
            stacking: Stacking::for_layer_height(params.layer_height),
            first_ring: Vec::with_capacity(samples),
            previous_ring: Vec::with_capacity(samples),
            current_ring: Vec::with_capacity(samples),
        })
    }

    /// Current state.
    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Advances one state and returns the new one.
    pub fn step(&mut self) -> AssemblyState {
        self.state = match self.state {
            AssemblyState::Start => {
                let edges = (2 * self.layers).saturating_sub(1) * self.samples;
                self.builder
                    .reserve(self.params.vertex_count(), edges, self.params.face_count());
                debug!(
                    layers = self.layers,
                    samples_per_layer = self.samples,
                    "assembling vase"
                );
                self.next_after(None)
            }
            AssemblyState::SamplingLayer(layer) => {
                self.emit_layer(layer);
                self.next_after(Some(layer))
            }
            AssemblyState::Capping => {
                self.emit_caps();
                AssemblyState::Done
            }
            AssemblyState::Done => AssemblyState::Done,
        };
        self.state
    }

    /// Runs to completion and returns the finished mesh.
    pub fn finish(mut self) -> B::Output {
        while self.state != AssemblyState::Done {
            self.step();
        }
        debug!(
            vertices = self.params.vertex_count(),
            faces = self.params.face_count(),
            "vase assembled"
        );
        self.builder.finalize()
    }

    fn next_after(&self, layer: Option<usize>) -> AssemblyState {
        let next = layer.map_or(0, |l| l + 1);
        if next < self.layers {
            AssemblyState::SamplingLayer(next)
        } else {
            AssemblyState::Capping
        }
    }

    fn emit_layer(&mut self, layer: usize) {
        trace!(layer, "sampling layer");
        let sampler = LayerSampler::new(self.params, layer);

        self.current_ring.clear();
        for position in sampler.samples() {
            let v = self.builder.add_vertex(position);
            self.current_ring.push(v);
        }

        let n = self.samples;
        for i in 1..n {
            self.builder
                .add_edge(self.current_ring[i - 1], self.current_ring[i]);
        }
        if n > 2 {
            self.builder
                .add_edge(self.current_ring[n - 1], self.current_ring[0]);
        }

        if layer > 0 {
            for i in 0..n {
                let prev = (i + n - 1) % n;
                let below = self.previous_ring[i];
                let below_prev = self.previous_ring[prev];
                let here = self.current_ring[i];
                let here_prev = self.current_ring[prev];

                self.builder.add_edge(below, here);
                match self.stacking {
                    Stacking::Up => self.builder.add_face(&[below, below_prev, here_prev, here]),
                    Stacking::Down => self.builder.add_face(&[here, here_prev, below_prev, below]),
                }
            }
        } else {
            self.first_ring.clear();
            self.first_ring.extend_from_slice(&self.current_ring);
        }

        std::mem::swap(&mut self.previous_ring, &mut self.current_ring);
    }

    fn emit_caps(&mut self) {
        if self.layers == 0 {
            return;
        }
        // After the last swap, `previous_ring` holds the top layer.
        match self.stacking {
            Stacking::Up => {
                self.builder.add_face(&self.first_ring);
                let top: Vec<B::VertexRef> = self.previous_ring.iter().rev().copied().collect();
                self.builder.add_face(&top);
            }
            Stacking::Down => {
                let bottom: Vec<B::VertexRef> = self.first_ring.iter().rev().copied().collect();
                self.builder.add_face(&bottom);
                self.builder.add_face(&self.previous_ring);
            }
        }
    }
}

/// Generates the vase described by `params` into `builder`.
///
/// Validation runs first; on error nothing is emitted and no mesh is
/// returned.
///
/// # Errors
///
/// Any [`VaseParams::validate`] failure.
pub fn assemble<B: MeshBuilder>(params: &VaseParams, builder: B) -> Result<B::Output, VaseError> {
    Ok(TopologyAssembler::new(params, builder)?.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    /// Records every builder call in order.
    #[derive(Default)]
    struct Recorder {
        vertices: usize,
        calls: Vec<Call>,
        finalized: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Vertex(usize),
        Edge(usize, usize),
        Face(Vec<usize>),
    }

    impl MeshBuilder for Recorder {
        type VertexRef = usize;
        type Output = Self;

        fn add_vertex(&mut self, _position: DVec3) -> usize {
            self.vertices += 1;
            self.calls.push(Call::Vertex(self.vertices - 1));
            self.vertices - 1
        }

        fn add_edge(&mut self, a: usize, b: usize) {
            self.calls.push(Call::Edge(a, b));
        }

        fn add_face(&mut self, vertices: &[usize]) {
            self.calls.push(Call::Face(vertices.to_vec()));
        }

        fn finalize(mut self) -> Self {
            self.finalized = true;
            self
        }
    }

    fn params(layers: i32, samples: i32) -> VaseParams {
        VaseParams {
            layers,
            samples_per_layer: samples,
            ..VaseParams::default()
        }
    }

    #[test]
    fn test_invalid_params_emit_nothing() {
        let bad = params(-1, 4);
        assert!(TopologyAssembler::new(&bad, Recorder::default()).is_err());
        assert!(assemble(&params(3, 0), Recorder::default()).is_err());
    }

    #[test]
    fn test_zero_layers_goes_straight_to_capping() {
        let p = params(0, 4);
        let mut assembler = TopologyAssembler::new(&p, Recorder::default()).unwrap();
        assert_eq!(assembler.state(), AssemblyState::Start);
        assert_eq!(assembler.step(), AssemblyState::Capping);
        assert_eq!(assembler.step(), AssemblyState::Done);
        assert_eq!(assembler.step(), AssemblyState::Done);
        let rec = assembler.finish();
        assert!(rec.finalized);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_single_layer_call_sequence() {
        let rec = assemble(&params(1, 3), Recorder::default()).unwrap();
        assert_eq!(
            rec.calls,
            vec![
                Call::Vertex(0),
                Call::Vertex(1),
                Call::Vertex(2),
                Call::Edge(0, 1),
                Call::Edge(1, 2),
                Call::Edge(2, 0),
                Call::Face(vec![0, 1, 2]),
                Call::Face(vec![2, 1, 0]),
            ]
        );
    }

    #[test]
    fn test_second_layer_quads() {
        let rec = assemble(&params(2, 3), Recorder::default()).unwrap();
        let faces: Vec<Vec<usize>> = rec
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Face(f) => Some(f.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            faces,
            vec![
                vec![0, 2, 5, 3],
                vec![1, 0, 3, 4],
                vec![2, 1, 4, 5],
                vec![0, 1, 2],
                vec![5, 4, 3],
            ]
        );
    }

    #[test]
    fn test_vertical_edges_follow_sample_index() {
        let rec = assemble(&params(2, 4), Recorder::default()).unwrap();
        for i in 0..4 {
            assert!(rec.calls.contains(&Call::Edge(i, i + 4)));
        }
    }

    #[test]
    fn test_small_rings_emit_each_edge_once() {
        for samples in 1..=4 {
            let rec = assemble(&params(3, samples), Recorder::default()).unwrap();
            let mut seen = std::collections::HashSet::new();
            for call in &rec.calls {
                if let Call::Edge(a, b) = *call {
                    assert_ne!(a, b, "self-loop with {samples} samples");
                    assert!(seen.insert((a.min(b), a.max(b))), "repeat with {samples} samples");
                }
            }
        }

        let one = assemble(&params(2, 1), Recorder::default()).unwrap();
        let edges: Vec<&Call> = one.calls.iter().filter(|c| matches!(c, Call::Edge(..))).collect();
        assert_eq!(edges, vec![&Call::Edge(0, 1)]);
    }

    #[test]
    fn test_negative_height_flips_every_face() {
        let up = assemble(&params(2, 3), Recorder::default()).unwrap();
        let down_params = VaseParams {
            layer_height: -0.2,
            ..params(2, 3)
        };
        let down = assemble(&down_params, Recorder::default()).unwrap();

        let faces = |rec: &Recorder| -> Vec<Vec<usize>> {
            rec.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Face(f) => Some(f.clone()),
                    _ => None,
                })
                .collect()
        };
        for (u, d) in faces(&up).iter().zip(faces(&down)) {
            let mut reversed = u.clone();
            reversed.reverse();
            assert_eq!(reversed, d);
        }
    }
}
