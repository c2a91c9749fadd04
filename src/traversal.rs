//! Step-driven breadth-first / depth-first search over the open passages of a maze.
//!
//! A `Traversal` is a session owned by its caller. Every `step` does exactly one unit of work
//! (pops one frontier vertex) and never blocks, so an external tick source can drive it and
//! read the frontier, visited set and predecessor map between steps.

use std::collections::VecDeque;
use std::fmt;

use bit_set::BitSet;
use fnv::FnvHashMap;
use tracing::{error, trace};

use crate::errors::{MazeError, Result};
use crate::grid::{Grid, VertexSmallVec};
use crate::pathing;
use crate::union_find::DisjointSets;
use crate::units::VertexId;

/// Child vertex to the vertex it was first discovered from.
pub type PredecessorMap = FnvHashMap<VertexId, VertexId>;

/// A graph the traversal engine can walk: vertices `0..vertex_count` and the neighbours
/// reachable from each through an open passage.
pub trait Passages {
    fn vertex_count(&self) -> usize;
    fn open_neighbours(&self, v: VertexId) -> VertexSmallVec;
}

impl Passages for Grid {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.size()
    }

    #[inline]
    fn open_neighbours(&self, v: VertexId) -> VertexSmallVec {
        self.passages(v)
    }
}

/// Where newly discovered vertices go in the frontier. Vertices are always popped from the head.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Append at the tail: first in, first out.
    BreadthFirst,
    /// Insert at `insert_at`, clamped to the frontier length. 0 is a plain stack.
    DepthFirst { insert_at: usize },
}

impl FrontierPolicy {
    pub fn depth_first() -> FrontierPolicy {
        FrontierPolicy::DepthFirst { insert_at: 0 }
    }

    fn enqueue(self, frontier: &mut VecDeque<VertexId>, v: VertexId) {
        match self {
            FrontierPolicy::BreadthFirst => frontier.push_back(v),
            FrontierPolicy::DepthFirst { insert_at } => {
                let index = insert_at.min(frontier.len());
                frontier.insert(index, v);
            }
        }
    }
}

impl Default for FrontierPolicy {
    fn default() -> FrontierPolicy {
        FrontierPolicy::BreadthFirst
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Done,
}

/// What a single step did, for presenters that animate the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The vertex popped from the frontier head.
    pub vertex: VertexId,
    /// The vertex had been handled already, the step did nothing else.
    pub already_visited: bool,
    pub reached_target: bool,
    /// Unvisited neighbours pushed onto the frontier, in discovery order.
    pub discovered: VertexSmallVec,
}

pub struct Traversal<'a, P: Passages + ?Sized> {
    graph: &'a P,
    policy: FrontierPolicy,
    source: VertexId,
    target: VertexId,
    frontier: VecDeque<VertexId>,
    visited: BitSet,
    predecessors: PredecessorMap,
    completed: Option<PredecessorMap>,
    last_step: Option<StepRecord>,
    steps: usize,
}

impl<'a, P: Passages + ?Sized> fmt::Debug for Traversal<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Traversal :: {:?} {} -> {}, steps: {}, frontier: {}, visited: {}, done: {}",
               self.policy, self.source, self.target, self.steps, self.frontier.len(),
               self.visited.len(), self.is_done())
    }
}

impl<'a, P: Passages + ?Sized> Traversal<'a, P> {
    /// Open a session searching `graph` from `source` for `target`. The frontier starts
    /// holding only `source`.
    pub fn new(graph: &'a P,
               source: VertexId,
               target: VertexId,
               policy: FrontierPolicy)
               -> Result<Traversal<'a, P>> {
        for &v in &[source, target] {
            if v.0 >= graph.vertex_count() {
                return Err(MazeError::InvalidVertex(v));
            }
        }

        let vertex_count = graph.vertex_count();
        let mut traversal = Traversal {
            graph,
            policy,
            source,
            target,
            frontier: VecDeque::with_capacity(vertex_count),
            visited: BitSet::with_capacity(vertex_count),
            predecessors: FnvHashMap::with_capacity_and_hasher(vertex_count, Default::default()),
            completed: None,
            last_step: None,
            steps: 0,
        };
        traversal.restart(policy);
        Ok(traversal)
    }

    /// Throw away all search state and start again from the source.
    pub fn restart(&mut self, policy: FrontierPolicy) {
        self.policy = policy;
        self.frontier.clear();
        self.frontier.push_back(self.source);
        self.visited.clear();
        self.predecessors.clear();
        self.completed = None;
        self.last_step = None;
        self.steps = 0;
    }

    /// Pop one vertex off the frontier and process it.
    ///
    /// An already visited vertex is skipped. Reaching the target completes the session.
    /// Otherwise every unvisited open neighbour gets its predecessor recorded (the first
    /// discovery wins) and is placed on the frontier according to the policy.
    pub fn step(&mut self) -> Result<Progress> {
        if self.completed.is_some() {
            return Err(MazeError::StepAfterCompletion);
        }

        let current = match self.frontier.pop_front() {
            Some(v) => v,
            None => {
                let components = self.count_components();
                error!(source = %self.source,
                       target = %self.target,
                       components,
                       "frontier ran dry before reaching the target");
                return Err(MazeError::DisconnectedSpanningTree { components });
            }
        };
        self.steps += 1;

        if self.visited.contains(current.0) {
            trace!(vertex = %current, "already visited");
            self.last_step = Some(StepRecord {
                vertex: current,
                already_visited: true,
                reached_target: false,
                discovered: VertexSmallVec::new(),
            });
            return Ok(Progress::Continue);
        }

        if current == self.target {
            self.visited.insert(current.0);
            self.completed = Some(self.predecessors.clone());
            trace!(vertex = %current, steps = self.steps, "reached target");
            self.last_step = Some(StepRecord {
                vertex: current,
                already_visited: false,
                reached_target: true,
                discovered: VertexSmallVec::new(),
            });
            return Ok(Progress::Done);
        }

        let mut discovered = VertexSmallVec::new();
        for neighbour in self.graph.open_neighbours(current) {
            if self.visited.contains(neighbour.0) {
                continue;
            }
            self.predecessors.entry(neighbour).or_insert(current);
            self.policy.enqueue(&mut self.frontier, neighbour);
            discovered.push(neighbour);
        }
        self.visited.insert(current.0);

        trace!(vertex = %current, discovered = discovered.len(), frontier = self.frontier.len(), "step");
        self.last_step = Some(StepRecord {
            vertex: current,
            already_visited: false,
            reached_target: false,
            discovered,
        });
        Ok(Progress::Continue)
    }

    /// Step until the target is reached. Returns the total number of steps taken.
    pub fn run(&mut self) -> Result<usize> {
        while self.step()? == Progress::Continue {}
        Ok(self.steps)
    }

    /// The source to target path. Only available once the session is done.
    pub fn path(&self) -> Result<Vec<VertexId>> {
        let predecessors = self.completed.as_ref().ok_or(MazeError::TraversalInProgress)?;
        pathing::reconstruct(predecessors, self.source, self.target)
    }

    /// Path from the source to any vertex discovered so far, from the live predecessor map.
    pub fn path_to(&self, v: VertexId) -> Result<Vec<VertexId>> {
        pathing::reconstruct(&self.predecessors, self.source, v)
    }

    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    pub fn target(&self) -> VertexId {
        self.target
    }

    #[inline]
    pub fn policy(&self) -> FrontierPolicy {
        self.policy
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.completed.is_some()
    }

    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn frontier(&self) -> &VecDeque<VertexId> {
        &self.frontier
    }

    #[inline]
    pub fn visited(&self) -> &BitSet {
        &self.visited
    }

    #[inline]
    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited.contains(v.0)
    }

    pub fn visited_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visited.iter().map(VertexId)
    }

    /// Live predecessor map, still growing while the session runs.
    #[inline]
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Predecessor map frozen at the moment the target was reached.
    #[inline]
    pub fn completed_predecessors(&self) -> Option<&PredecessorMap> {
        self.completed.as_ref()
    }

    #[inline]
    pub fn last_step(&self) -> Option<&StepRecord> {
        self.last_step.as_ref()
    }

    fn count_components(&self) -> usize {
        let vertex_count = self.graph.vertex_count();
        let mut sets = DisjointSets::new(vertex_count);
        for v in (0..vertex_count).map(VertexId) {
            for neighbour in self.graph.open_neighbours(v) {
                sets.union(v, neighbour);
            }
        }
        sets.components()
    }
}
