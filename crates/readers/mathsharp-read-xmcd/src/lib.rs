//! Mathcad worksheet (`.xmcd`) reader for mathsharp.
//!
//! Parses worksheet XML into an immutable [`Document`] tree. Element names
//! are resolved against their namespace declarations, so translators can
//! match on the math, worksheet and units vocabularies regardless of the
//! prefixes a particular file uses.
//!
//! # Example
//!
//! ```
//! use mathsharp_read_xmcd::parse;
//! use mathsharp_xmcd::{Classify, Kind};
//!
//! let xmcd = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
//!                          xmlns:ml="http://schemas.mathsoft.com/math30">
//!   <math><ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real></ml:define></math>
//! </worksheet>"#;
//!
//! let doc = parse(xmcd).unwrap().value;
//! let define = doc.root().descendants().find(|n| n.kind() == Kind::Define);
//! assert!(define.is_some());
//! ```

pub mod binary;

use mathsharp_core::{
    Attributes, ConversionResult, Document, DocumentBuilder, FidelityWarning, ParseError, QName,
    Severity, WarningKind,
};
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use std::path::Path;

/// Parse worksheet XML into a document.
pub fn parse(input: &str) -> Result<ConversionResult<Document>, ParseError> {
    let mut reader = NsReader::from_str(input);

    let mut converter = Converter::new();
    converter.parse(&mut reader)?;

    Ok(ConversionResult::with_warnings(
        converter.builder.finish()?,
        converter.warnings,
    ))
}

/// Read and parse a worksheet file.
pub fn parse_file(path: &Path) -> Result<ConversionResult<Document>, ParseError> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}

struct Converter {
    builder: DocumentBuilder,
    warnings: Vec<FidelityWarning>,
}

impl Converter {
    fn new() -> Self {
        Self {
            builder: DocumentBuilder::new(),
            warnings: Vec::new(),
        }
    }

    fn parse(&mut self, reader: &mut NsReader<&[u8]>) -> Result<(), ParseError> {
        let mut buf = Vec::new();

        loop {
            match reader.read_resolved_event_into(&mut buf) {
                Ok((resolved, Event::Start(e))) => {
                    let name = self.qualified_name(resolved, &e);
                    self.builder.open(name, attributes(&e))?;
                }
                Ok((resolved, Event::Empty(e))) => {
                    let name = self.qualified_name(resolved, &e);
                    self.builder.leaf(name, attributes(&e))?;
                }
                Ok((_, Event::End(_))) => {
                    self.builder.close();
                }
                Ok((_, Event::Text(e))) => {
                    let raw = String::from_utf8_lossy(e.as_ref());
                    self.push_text(&raw);
                }
                Ok((_, Event::CData(e))) => {
                    self.builder.text(&String::from_utf8_lossy(e.as_ref()));
                }
                Ok((_, Event::GeneralRef(e))) => {
                    let name = String::from_utf8_lossy(e.as_ref()).into_owned();
                    self.push_reference(&name);
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => {} // Declarations, comments, processing instructions
                Err(e) => {
                    return Err(ParseError::Invalid(format!("XML parse error: {}", e)));
                }
            }
            buf.clear();
        }

        Ok(())
    }

    fn qualified_name(&mut self, resolved: ResolveResult<'_>, e: &BytesStart<'_>) -> QName {
        let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
        match resolved {
            ResolveResult::Bound(ns) => {
                QName::new(String::from_utf8_lossy(ns.as_ref()).into_owned(), local)
            }
            ResolveResult::Unbound => QName::unbound(local),
            ResolveResult::Unknown(prefix) => {
                let prefix = String::from_utf8_lossy(&prefix).into_owned();
                self.warnings.push(FidelityWarning::new(
                    Severity::Minor,
                    WarningKind::UnboundPrefix(prefix.clone()),
                    format!("element <{prefix}:{local}> uses an undeclared prefix"),
                ));
                QName::unbound(local)
            }
        }
    }

    fn push_text(&mut self, raw: &str) {
        match quick_xml::escape::unescape(raw) {
            Ok(text) => self.builder.text(&text),
            Err(_) => self.builder.text(raw),
        }
    }

    fn push_reference(&mut self, name: &str) {
        let reference = format!("&{name};");
        match quick_xml::escape::unescape(&reference) {
            Ok(text) => self.builder.text(&text),
            Err(_) => {
                self.warnings.push(FidelityWarning::new(
                    Severity::Minor,
                    WarningKind::UnknownEntity(name.to_string()),
                    format!("unknown entity reference {reference} kept verbatim"),
                ));
                self.builder.text(&reference);
            }
        }
    }
}

/// Collect non-namespace attributes keyed by local name.
fn attributes(e: &BytesStart<'_>) -> Attributes {
    let mut attrs = Attributes::new();
    for attr in e.attributes().flatten() {
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = match quick_xml::escape::unescape(&raw) {
            Ok(v) => v.into_owned(),
            Err(_) => raw,
        };
        attrs.set(key, value);
    }
    attrs
}
