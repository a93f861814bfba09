use bit_set::BitSet;
use thiserror::Error;

use crate::instance::{InstanceRecord, VertexId};

/** reasons a candidate coloring can be rejected */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckerError {
    /// the color list does not cover exactly the vertex set
    #[error("coloring has {found} entries but the instance has {expected} vertices")]
    WrongVertexCount {
        /// number of vertices of the instance
        expected: usize,
        /// number of entries in the color list
        found: usize,
    },
    /// two adjacent vertices share a color
    #[error("vertices {0} and {1} are adjacent and both colored {2}")]
    ConflictingEdge(VertexId, VertexId, usize),
}

/**
checks a candidate coloring against the instance's graph data.

Returns the actual number of distinct colors used if the coloring is proper,
or the first violation found. The count returned here is authoritative:
callers must use it instead of the `num_colors` claimed by the solution file.
*/
pub fn verify(inst:&InstanceRecord, colors:&[usize]) -> Result<usize, CheckerError> {
    // check that every vertex is colored exactly once (index = vertex id)
    if colors.len() != inst.n() {
        return Err(CheckerError::WrongVertexCount {
            expected: inst.n(), found: colors.len()
        });
    }
    // check conflicts
    for (a,b) in inst.edges() {
        if colors[a] == colors[b] {
            return Err(CheckerError::ConflictingEdge(a, b, colors[a]));
        }
    }
    // count the colors actually used
    let mut used = BitSet::new();
    for c in colors {
        used.insert(*c);
    }
    Ok(used.len())
}
