use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// canonical `type` tag stamped on solution files
pub const SOLUTION_TYPE: &str = "Solution_GraphColoring";

fn default_sol_type() -> String { SOLUTION_TYPE.to_string() }

/** a candidate coloring read from a solution file.

`colors[v]` is the color of vertex `v`; `num_colors` is the distinct color
count *claimed* by whoever produced the file. The claim is not trusted
anywhere: the checker recounts, and only its count is ever persisted.
*/
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coloring {
    /// solution type tag
    #[serde(rename="type", default="default_sol_type")]
    sol_type: String,
    /// name of the instance this coloring belongs to
    instance: String,
    /// claimed number of distinct colors
    num_colors: usize,
    /// color list (colors[v]: color of vertex v)
    colors: Vec<usize>,
}

impl Coloring {

    /// constructor from an instance name and a color list
    pub fn new(instance:&str, colors:Vec<usize>, num_colors:usize) -> Self {
        Self {
            sol_type: SOLUTION_TYPE.to_string(),
            instance: instance.to_string(),
            num_colors, colors,
        }
    }

    /** reads a coloring from a solution file. */
    pub fn from_file(filename:&str) -> Result<Self> {
        if !Path::new(filename).exists() {
            return Err(Error::MissingFile(filename.to_string()));
        }
        let content = fs::read_to_string(filename)
            .map_err(|e| Error::Io { filename:filename.to_string(), source:e })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Parse { filename:filename.to_string(), source:e })
    }

    /** writes the coloring to a solution file. */
    pub fn write_to_file(&self, filename:&str) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| Error::Encode { filename:filename.to_string(), source:e })?;
        fs::write(filename, content)
            .map_err(|e| Error::Io { filename:filename.to_string(), source:e })
    }

    /// name of the instance this coloring refers to
    pub fn instance(&self) -> &str { &self.instance }

    /// claimed number of distinct colors
    pub fn num_colors(&self) -> usize { self.num_colors }

    /// color list
    pub fn colors(&self) -> &[usize] { &self.colors }

    /// copy of the coloring with `num_colors` replaced by the checker's count
    pub fn with_verified_count(&self, num_colors:usize) -> Self {
        Self {
            sol_type: SOLUTION_TYPE.to_string(),
            instance: self.instance.clone(),
            num_colors,
            colors: self.colors.clone(),
        }
    }
}
