//! Net-name → (driver, sinks) index over a list of blocks.
//!
//! Both the placer's cost function and the router's net extraction need this
//! view; it is computed once per stage and used read-only thereafter.

use std::collections::HashMap;

use crate::block::LogicBlock;

/// Maps net names to the block that drives them and the blocks that sink
/// them.
#[derive(Debug, Default)]
pub struct NetIndex {
    drivers: HashMap<String, u32>,
    sinks: HashMap<String, Vec<u32>>,
}

impl NetIndex {
    /// Builds a net index from a block list. Blocks with an empty net name
    /// entry are skipped for that pin.
    pub fn build(blocks: &[LogicBlock]) -> Self {
        let mut drivers = HashMap::new();
        let mut sinks: HashMap<String, Vec<u32>> = HashMap::new();

        for block in blocks {
            if let Some(net) = &block.output_net {
                if !net.is_empty() {
                    drivers.insert(net.clone(), block.id);
                }
            }
            for net in &block.input_nets {
                if !net.is_empty() {
                    sinks.entry(net.clone()).or_default().push(block.id);
                }
            }
        }

        Self { drivers, sinks }
    }

    /// The id of the block driving `net`, if any.
    pub fn driver(&self, net: &str) -> Option<u32> {
        self.drivers.get(net).copied()
    }

    /// The ids of the blocks sinking `net`.
    pub fn sinks(&self, net: &str) -> &[u32] {
        self.sinks.get(net).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All net names that appear as a driver, a sink, or both.
    pub fn net_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .drivers
            .keys()
            .chain(self.sinks.keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfpga_fabric::TileType;

    fn block(id: u32, output: Option<&str>, inputs: &[&str]) -> LogicBlock {
        LogicBlock {
            id,
            name: format!("b{id}"),
            tile_type: TileType::Clb,
            input_nets: inputs.iter().map(|s| s.to_string()).collect(),
            output_net: output.map(str::to_string),
            clock_net: None,
        }
    }

    #[test]
    fn finds_driver_and_sinks() {
        let blocks = vec![block(0, Some("n1"), &[]), block(1, None, &["n1"])];
        let index = NetIndex::build(&blocks);
        assert_eq!(index.driver("n1"), Some(0));
        assert_eq!(index.sinks("n1"), &[1]);
    }

    #[test]
    fn empty_net_name_skipped() {
        let blocks = vec![block(0, Some(""), &[""])];
        let index = NetIndex::build(&blocks);
        assert!(index.net_names().is_empty());
    }

    #[test]
    fn net_names_sorted_and_deduped() {
        let blocks = vec![
            block(0, Some("n2"), &["n1"]),
            block(1, None, &["n1"]),
        ];
        let index = NetIndex::build(&blocks);
        assert_eq!(index.net_names(), vec!["n1".to_string(), "n2".to_string()]);
    }
}
