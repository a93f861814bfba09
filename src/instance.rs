use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::solution::Coloring;

/** Vertex Id */
pub type VertexId = usize;

/// canonical `type` tag stamped on instance files
pub const INSTANCE_TYPE: &str = "Instance_GraphColoring";

/** precomputed metadata stored alongside the graph data */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preprocessed {
    /// degrees[v]: degree of vertex v
    pub degrees: Vec<usize>,
    /// dominations[v]: vertices dominated by v
    #[serde(skip_serializing_if="Option::is_none")]
    pub dominations: Option<Vec<Vec<VertexId>>>,
}

/** an instance record as persisted on disk.

Holds the graph data (parallel edge-endpoint arrays), optional precomputed
metadata, and the best known coloring if one has been merged in. Fields the
tools do not interpret (the generator also stores geometric data) are kept in
`extra` so a read-modify-write cycle does not lose them.
*/
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// instance type tag
    #[serde(rename="type", default)]
    inst_type: String,
    /// number of vertices
    n: usize,
    /// number of edges
    m: usize,
    /// edge_i[e]: first endpoint of the eth edge
    edge_i: Vec<VertexId>,
    /// edge_j[e]: second endpoint of the eth edge
    edge_j: Vec<VertexId>,
    /// precomputed metadata (degrees, dominations)
    #[serde(skip_serializing_if="Option::is_none")]
    preprocessed: Option<Preprocessed>,
    /// best known coloring
    #[serde(skip_serializing_if="Option::is_none")]
    coloring: Option<Coloring>,
    /// uninterpreted fields, preserved across read-modify-write
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl InstanceRecord {

    /** constructor from an edge list */
    pub fn new(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        Self {
            inst_type: INSTANCE_TYPE.to_string(),
            n,
            m: edges.len(),
            edge_i: edges.iter().map(|e| e.0).collect(),
            edge_j: edges.iter().map(|e| e.1).collect(),
            preprocessed: None,
            coloring: None,
            extra: Map::new(),
        }
    }

    /** reads an instance record from a file. */
    pub fn from_file(filename:&str) -> Result<Self> {
        if !Path::new(filename).exists() {
            return Err(Error::MissingFile(filename.to_string()));
        }
        let content = fs::read_to_string(filename)
            .map_err(|e| Error::Io { filename:filename.to_string(), source:e })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Parse { filename:filename.to_string(), source:e })
    }

    /** writes the record back to its file.

    The content is written to a sibling temporary path and renamed over the
    original, so a crash mid-write cannot truncate the record.
    */
    pub fn write_to_file(&self, filename:&str) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| Error::Encode { filename:filename.to_string(), source:e })?;
        let tmp_filename = format!("{}.tmp", filename);
        fs::write(&tmp_filename, content)
            .map_err(|e| Error::Io { filename:tmp_filename.clone(), source:e })?;
        fs::rename(&tmp_filename, filename)
            .map_err(|e| Error::Io { filename:filename.to_string(), source:e })
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// iterator over the edges of the graph
    pub fn edges(&self) -> impl Iterator<Item=(VertexId,VertexId)> + '_ {
        self.edge_i.iter().zip(self.edge_j.iter()).map(|(a,b)| (*a,*b))
    }

    /// per-vertex degrees: the precomputed list when present, otherwise
    /// recomputed from the edge lists
    pub fn degrees(&self) -> Vec<usize> {
        match &self.preprocessed {
            Some(p) => p.degrees.clone(),
            None => {
                let mut res = vec![0 ; self.n];
                for (a,b) in self.edges() {
                    res[a] += 1;
                    res[b] += 1;
                }
                res
            }
        }
    }

    /// best known coloring, if one has been merged in
    pub fn coloring(&self) -> Option<&Coloring> { self.coloring.as_ref() }

    /// replaces the best known coloring
    pub fn set_coloring(&mut self, coloring:Coloring) {
        self.coloring = Some(coloring);
    }

    /// current type tag
    pub fn inst_type(&self) -> &str { &self.inst_type }

    /// (re)stamps the canonical instance type tag
    pub fn stamp_type(&mut self) {
        self.inst_type = INSTANCE_TYPE.to_string();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_filename(name:&str) -> String {
        std::env::temp_dir()
            .join(format!("color_bench_{}_{}", std::process::id(), name))
            .to_string_lossy().to_string()
    }

    #[test]
    fn test_read_instance() {
        let inst = InstanceRecord::from_file("insts/grid2x2.instance.json").unwrap();
        assert_eq!(inst.n(), 4);
        assert_eq!(inst.m(), 4);
        assert_eq!(inst.degrees(), vec![2,2,2,2]);
        assert!(inst.coloring().is_none());
    }

    #[test]
    fn test_missing_instance_file() {
        assert!(matches!(
            InstanceRecord::from_file("insts/does_not_exist.instance.json"),
            Err(Error::MissingFile(_))
        ));
    }

    #[test]
    fn test_malformed_instance_file() {
        let filename = tmp_filename("malformed.instance.json");
        fs::write(&filename, "{ not json").unwrap();
        assert!(matches!(
            InstanceRecord::from_file(&filename),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_degrees_computed_when_not_stored() {
        let inst = InstanceRecord::new(4, &[(0,1),(1,2),(2,3),(3,0)]);
        assert_eq!(inst.degrees(), vec![2,2,2,2]);
    }

    #[test]
    fn test_write_preserves_uninterpreted_fields() {
        let source = r#"{"type":"Instance_GraphColoring","n":2,"m":1,
            "edge_i":[0],"edge_j":[1],
            "x":[0.0,1.0],"y":[0.0,0.0]}"#;
        let inst:InstanceRecord = serde_json::from_str(source).unwrap();
        let filename = tmp_filename("extra.instance.json");
        inst.write_to_file(&filename).unwrap();
        let reread:Value = serde_json::from_str(
            &fs::read_to_string(&filename).unwrap()
        ).unwrap();
        assert_eq!(reread["x"], serde_json::json!([0.0,1.0]));
        assert_eq!(reread["y"], serde_json::json!([0.0,0.0]));
        assert_eq!(reread["n"], serde_json::json!(2));
    }

    #[test]
    fn test_write_then_reread() {
        let mut inst = InstanceRecord::new(4, &[(0,1),(1,2),(2,3),(3,0)]);
        inst.set_coloring(crate::solution::Coloring::new("tmp", vec![0,1,0,1], 2));
        let filename = tmp_filename("roundtrip.instance.json");
        inst.write_to_file(&filename).unwrap();
        let reread = InstanceRecord::from_file(&filename).unwrap();
        assert_eq!(reread.n(), 4);
        assert_eq!(reread.coloring().unwrap().num_colors(), 2);
    }
}
