//! Yosys-style JSON netlist ingestion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NetlistError;

/// A single bit of a cell connection: either a wire (by numeric id) or an
/// ignored constant driver.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NetBit {
    /// A wire, identified by its numeric bit id. Rendered as `net_<id>`.
    Wire(u64),
    /// A constant driver (e.g. `"0"`, `"1"`, `"x"`). Contributes no net.
    Const(String),
}

/// One cell as parsed from the netlist JSON, before packing.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParsedCell {
    /// The cell's instance name.
    pub name: String,
    /// The cell's technology-mapped type string (e.g. `"$lut"`, `"DFF"`).
    pub cell_type: String,
    /// Port name to connected bits.
    pub connections: BTreeMap<String, Vec<NetBit>>,
}

/// Parses a Yosys-style JSON netlist dump into a list of cells.
///
/// Only the first module encountered (by JSON key order) is read; a design
/// with multiple modules is expected to have already been flattened upstream.
pub fn parse_netlist_json(text: &str) -> Result<Vec<ParsedCell>, NetlistError> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| NetlistError::InputMalformed(format!("invalid JSON: {e}")))?;

    let modules = root
        .get("modules")
        .and_then(Value::as_object)
        .ok_or_else(|| NetlistError::InputMalformed("missing `modules` object".into()))?;

    let (_name, module) = modules
        .iter()
        .next()
        .ok_or_else(|| NetlistError::InputMalformed("`modules` is empty".into()))?;

    let cells = module
        .get("cells")
        .and_then(Value::as_object)
        .ok_or_else(|| NetlistError::InputMalformed("module missing `cells` object".into()))?;

    let mut parsed = Vec::with_capacity(cells.len());
    for (name, cell) in cells {
        let cell_type = cell
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| NetlistError::InputMalformed(format!("cell `{name}` missing `type`")))?
            .to_string();

        let connections_obj = cell
            .get("connections")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                NetlistError::InputMalformed(format!("cell `{name}` missing `connections`"))
            })?;

        let mut connections = BTreeMap::new();
        for (port, bits) in connections_obj {
            let bits_arr = bits.as_array().ok_or_else(|| {
                NetlistError::InputMalformed(format!(
                    "cell `{name}` port `{port}` connections must be an array"
                ))
            })?;
            let mut netbits = Vec::with_capacity(bits_arr.len());
            for bit in bits_arr {
                if let Some(i) = bit.as_u64() {
                    netbits.push(NetBit::Wire(i));
                } else if let Some(s) = bit.as_str() {
                    netbits.push(NetBit::Const(s.to_string()));
                } else {
                    return Err(NetlistError::InputMalformed(format!(
                        "cell `{name}` port `{port}` has a non wire/constant bit"
                    )));
                }
            }
            connections.insert(port.clone(), netbits);
        }

        parsed.push(ParsedCell {
            name: name.clone(),
            cell_type,
            connections,
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_module() {
        let json = r#"{
            "modules": {
                "top": {
                    "cells": {
                        "cell0": {
                            "type": "$lut",
                            "connections": { "A": [1], "Y": [2] }
                        }
                    }
                }
            }
        }"#;
        let cells = parse_netlist_json(json).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].cell_type, "$lut");
        assert_eq!(cells[0].connections["A"], vec![NetBit::Wire(1)]);
    }

    #[test]
    fn constant_bit_preserved_as_const() {
        let json = r#"{
            "modules": { "top": { "cells": { "c0": {
                "type": "DFF", "connections": { "D": ["0"], "Q": [3] }
            }}}}
        }"#;
        let cells = parse_netlist_json(json).unwrap();
        assert_eq!(cells[0].connections["D"], vec![NetBit::Const("0".into())]);
    }

    #[test]
    fn missing_modules_is_malformed() {
        let json = r#"{"foo": 1}"#;
        assert!(matches!(
            parse_netlist_json(json),
            Err(NetlistError::InputMalformed(_))
        ));
    }

    #[test]
    fn cell_missing_type_is_malformed() {
        let json = r#"{"modules":{"top":{"cells":{"c0":{"connections":{}}}}}}"#;
        assert!(matches!(
            parse_netlist_json(json),
            Err(NetlistError::InputMalformed(_))
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_netlist_json("not json"),
            Err(NetlistError::InputMalformed(_))
        ));
    }
}
