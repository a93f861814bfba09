use std::fs;

use nom::IResult;
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::multi::separated_list1;

use crate::error::{Error, Result};

/** one row of an instance catalog: an instance name and the path of its file. */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    /// instance name (matches the `instance` field of solution files)
    pub name: String,
    /// path of the instance file
    pub path: String,
}

/// reads the comma-separated fields of a single catalog line
fn read_fields(s:&str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(','), is_not(",\r\n"))(s)
}

/** parses a catalog from its text content.

The first line is a header naming the columns; `name` and `path` are
required, any other column is ignored. Empty lines are skipped.
*/
pub fn parse_catalog(s:&str) -> Result<Vec<CatalogRow>> {
    let mut lines = s.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next()
        .ok_or_else(|| Error::Catalog("empty catalog".to_string()))?;
    let (_,columns) = read_fields(header)
        .map_err(|_| Error::Catalog(format!("malformed header: {}", header)))?;
    let name_idx = columns.iter().position(|c| c.trim() == "name")
        .ok_or_else(|| Error::Catalog("missing 'name' column".to_string()))?;
    let path_idx = columns.iter().position(|c| c.trim() == "path")
        .ok_or_else(|| Error::Catalog("missing 'path' column".to_string()))?;
    let mut res = Vec::new();
    for line in lines {
        let (_,fields) = read_fields(line)
            .map_err(|_| Error::Catalog(format!("malformed row: {}", line)))?;
        if fields.len() <= name_idx || fields.len() <= path_idx {
            return Err(Error::Catalog(format!("truncated row: {}", line)));
        }
        res.push(CatalogRow {
            name: fields[name_idx].trim().to_string(),
            path: fields[path_idx].trim().to_string(),
        });
    }
    Ok(res)
}

/// reads a catalog from a file
pub fn read_from_file(filename:&str) -> Result<Vec<CatalogRow>> {
    if !std::path::Path::new(filename).exists() {
        return Err(Error::MissingFile(filename.to_string()));
    }
    let content = fs::read_to_string(filename)
        .map_err(|e| Error::Io { filename:filename.to_string(), source:e })?;
    parse_catalog(&content)
}
