//! Loader for the published address list XML.
//!
//! The whole file is read into memory and handed to `roxmltree`; the file
//! handle is released before any output file is touched.

use crate::config::ROOT_ELEMENT;
use crate::error::{Error, Result};
use crate::models::{AddressDocument, IpRange, Region};
use roxmltree::Node;
use std::path::Path;

/// Read and parse the address list at `path`.
pub fn load_document(path: &Path) -> Result<AddressDocument> {
    log::info!("#Start load_document() path={}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

/// Parse address list XML text into an [`AddressDocument`].
///
/// Fails when the text is not well-formed XML, the root element is not
/// [`ROOT_ELEMENT`], or an `<IpRange>` lacks its `Subnet` attribute.
pub fn parse_document(text: &str) -> Result<AddressDocument> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    if root.tag_name().name() != ROOT_ELEMENT {
        return Err(Error::WrongRoot {
            expected: ROOT_ELEMENT,
            found: root.tag_name().name().to_string(),
        });
    }

    let regions = root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Region")
        .map(parse_region)
        .collect::<Result<Vec<Region>>>()?;

    log::info!("# Got region count = {}", regions.len());
    Ok(AddressDocument { regions })
}

fn parse_region(node: Node) -> Result<Region> {
    let name = node.attribute("Name").map(String::from);
    let ip_ranges = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "IpRange")
        .map(|n| {
            n.attribute("Subnet")
                .map(|subnet| IpRange {
                    subnet: subnet.to_string(),
                })
                .ok_or_else(|| Error::MissingAttribute {
                    element: "IpRange",
                    attribute: "Subnet",
                    region: name.clone().unwrap_or_default(),
                })
        })
        .collect::<Result<Vec<IpRange>>>()?;

    Ok(Region { name, ip_ranges })
}
