#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mathsharp_xmcd::{math, ns};

/// Structure-aware input: trees over the recognized math vocabulary.
#[derive(Debug, Arbitrary)]
struct Tree {
    tag: u8,
    text: Option<u8>,
    children: Vec<Tree>,
}

const TEXTS: &[&str] = &["x", "1", "2.5", "π", "if", "e", "log", "ln", "3"];

impl Tree {
    fn render(&self, out: &mut String) {
        let tag = math::TAGS[self.tag as usize % math::TAGS.len()];
        out.push_str(&format!("<ml:{tag}>"));
        if let Some(t) = self.text {
            out.push_str(TEXTS[t as usize % TEXTS.len()]);
        }
        for child in &self.children {
            child.render(out);
        }
        out.push_str(&format!("</ml:{tag}>"));
    }
}

fuzz_target!(|regions: Vec<Tree>| {
    let mut xml = format!(
        r#"<worksheet xmlns="{}" xmlns:ml="{}"><regions>"#,
        ns::WORKSHEET,
        ns::MATH
    );
    for region in &regions {
        xml.push_str("<region><math>");
        region.render(&mut xml);
        xml.push_str("</math></region>");
    }
    xml.push_str("</regions></worksheet>");

    let doc = mathsharp_read_xmcd::parse(&xml).expect("generated worksheet is well-formed");
    let _ = mathsharp_write_csharp::emit(&doc.value);
});
