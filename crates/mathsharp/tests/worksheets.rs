//! End-to-end translation of complete worksheets.

use mathsharp::prelude::*;
use mathsharp::{Error, EmitError, Position, Severity, WarningKind, translate};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet version="3.0.3" xmlns="http://schemas.mathsoft.com/worksheet30"
           xmlns:ws="http://schemas.mathsoft.com/worksheet30"
           xmlns:ml="http://schemas.mathsoft.com/math30"
           xmlns:u="http://schemas.mathsoft.com/units10"
           xmlns:p="http://schemas.mathsoft.com/provenance10">
  <pointReleaseData/>
  <metadata><generator>Mathcad Professional 15.0</generator></metadata>
  <regions>"#;

const FOOTER: &str = r#"
  </regions>
</worksheet>"#;

fn worksheet(regions: &[&str]) -> String {
    let mut xml = String::from(HEADER);
    for (i, body) in regions.iter().enumerate() {
        xml.push_str(&format!(
            r#"
    <region region-id="{i}" left="24" top="{}" width="120" height="20">
      <math optimize="false" disable-calc="false">
        {body}
      </math>
    </region>"#,
            i * 30
        ));
    }
    xml.push_str(FOOTER);
    xml
}

fn members(regions: &[&str]) -> Vec<String> {
    let cs = translate(&worksheet(regions), &EmitOptions::default())
        .unwrap()
        .value;
    cs.lines()
        .skip_while(|l| !l.trim_start().starts_with("public class"))
        .skip(2)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && l != "}")
        .collect()
}

#[test]
fn test_beam_worksheet() {
    let regions = [
        r#"<ml:define xmlns:ml="http://schemas.mathsoft.com/math30">
             <ml:id xml:space="preserve">L</ml:id>
             <ml:real>3.5</ml:real>
           </ml:define>"#,
        r#"<ml:define>
             <ml:id xml:space="preserve" subscript="max">w</ml:id>
             <ml:apply>
               <ml:div/>
               <ml:apply><ml:mult/><ml:id>q</ml:id><ml:apply><ml:pow/><ml:id>L</ml:id><ml:real>2</ml:real></ml:apply></ml:apply>
               <ml:real>8</ml:real>
             </ml:apply>
           </ml:define>"#,
        r#"<ml:eval>
             <ml:id xml:space="preserve">M</ml:id>
             <ml:unitOverride><ml:apply><ml:mult/><ml:id>kN</ml:id><ml:id>m</ml:id></ml:apply></ml:unitOverride>
             <ml:result>
               <ml:unitedValue>
                 <ml:real>12.25</ml:real>
                 <u:unitMonomial><u:unitReference unit="kg"/></u:unitMonomial>
               </ml:unitedValue>
             </ml:result>
           </ml:eval>"#,
    ];
    let lines = members(&regions);
    assert_eq!(
        lines,
        [
            "public double L = 3.5;",
            "public double w_max { get { return ((q * (Math.Pow(L, 2))) / 8); } }",
            "public double M = 12.25; // unit: (kN * m)",
        ]
    );
}

#[test]
fn test_unit_layout_and_class_name() {
    let options = EmitOptions::for_document(std::path::Path::new("loads/2024 frame.xmcd"))
        .with_namespace("Structures");
    let cs = translate(&worksheet(&[]), &options).unwrap().value;
    assert!(cs.starts_with("using System;\n"));
    assert!(cs.contains("using MathNet.Numerics.LinearAlgebra;\n\nnamespace Structures\n{\n"));
    assert!(cs.contains("    public class _2024_frame\n    {\n    }\n}\n"));
}

#[test]
fn test_piecewise_function() {
    let regions = [r#"<ml:define>
         <ml:function>
           <ml:id>f</ml:id>
           <ml:boundVars><ml:id>x</ml:id></ml:boundVars>
         </ml:function>
         <ml:apply>
           <ml:id>if</ml:id>
           <ml:sequence>
             <ml:apply><ml:lessThan/><ml:id>x</ml:id><ml:real>0</ml:real></ml:apply>
             <ml:apply><ml:pow/><ml:id>x</ml:id><ml:real>2</ml:real></ml:apply>
             <ml:apply><ml:nthRoot/><ml:real>3</ml:real><ml:id>x</ml:id></ml:apply>
           </ml:sequence>
         </ml:apply>
       </ml:define>"#];
    let lines = members(&regions);
    assert_eq!(
        lines,
        [
            "public double f(double x)",
            "{",
            "return ((x < 0) ? ((Math.Pow(x, 2))) : (Math.Pow(x, (1.0 / 3))));",
        ]
    );
}

#[test]
fn test_stiffness_matrix_and_range() {
    let regions = [
        r#"<ml:define><ml:id>i</ml:id><ml:range><ml:real>0</ml:real><ml:id>n</ml:id></ml:range></ml:define>"#,
        r#"<ml:define><ml:id>K</ml:id>
             <ml:matrix rows="2" cols="3">
               <ml:real>1</ml:real><ml:real>2</ml:real><ml:real>3</ml:real>
               <ml:real>4</ml:real><ml:real>5</ml:real><ml:real>6</ml:real>
             </ml:matrix>
           </ml:define>"#,
    ];
    let lines = members(&regions);
    assert_eq!(lines[0], "public IEnumerable<int> i = Enumerable.Range(0, (n - 0));");
    assert_eq!(lines[1], "public Matrix<double> K");
    assert!(lines.contains(&"var matrix = Matrix<double>.Build.Dense(2, 3);".to_string()));
    // Flat index 4 lands in row 0, column 2
    assert!(lines.contains(&"matrix[0, 2] = 5;".to_string()));
    assert!(lines.contains(&"matrix[1, 2] = 6;".to_string()));
}

#[test]
fn test_complex_sum() {
    let regions = [r#"<ml:define><ml:id>z</ml:id>
         <ml:apply><ml:plus/>
           <ml:apply><ml:mult/><ml:imag>4</ml:imag><ml:id>b</ml:id></ml:apply>
           <ml:apply><ml:mult/><ml:real>2</ml:real><ml:id>a</ml:id></ml:apply>
         </ml:apply>
       </ml:define>"#];
    assert_eq!(
        members(&regions),
        ["public double z { get { return new Complex((2 * a), (4i * b)); } }"]
    );
}

#[test]
fn test_translator_warnings() {
    let regions = [
        r#"<ml:define><ml:id>x</ml:id><ml:real>1</ml:real></ml:define>"#,
        r#"<ml:eval><ml:id>y</ml:id><ml:unitOverride><ml:id>m</ml:id></ml:unitOverride>
             <ml:result><ml:real>2</ml:real></ml:result></ml:eval>"#,
        r#"<ml:summation><ml:id>k</ml:id></ml:summation>"#,
    ];
    let result = translate(&worksheet(&regions), &EmitOptions::default()).unwrap();

    let kinds: Vec<&str> = result.unimplemented_kinds().collect();
    assert_eq!(kinds, ["id", "real", "result", "summation", "unitOverride"]);
    assert!(result.warnings.iter().any(|w| {
        w.severity == Severity::Info && w.kind == WarningKind::UnitDiscarded("m".into())
    }));
    assert!(!result.has_errors());
}

#[test]
fn test_unsupported_construct_fails_document() {
    let regions = [
        r#"<ml:define><ml:id>ok</ml:id><ml:real>1</ml:real></ml:define>"#,
        r#"<ml:define><ml:id>x</ml:id><ml:real>3.5</ml:real><ml:real>1</ml:real></ml:define>"#,
    ];
    let err = translate(&worksheet(&regions), &EmitOptions::default()).unwrap_err();
    match err {
        Error::Emit(EmitError::Unsupported { position, shape }) => {
            assert_eq!(position, Position::Definition);
            assert_eq!(shape, "define(id, real, real)");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parsed_tree_is_navigable() {
    let doc = mathsharp::xmcd::parse(&worksheet(&[
        r#"<ml:define><ml:id>x</ml:id><ml:real>1</ml:real></ml:define>"#,
    ]))
    .unwrap()
    .value;
    let real = doc
        .root()
        .descendants()
        .find(|n| n.kind() == Kind::Real)
        .unwrap();
    let define = real.parent().unwrap();
    assert_eq!(define.kind(), Kind::Define);
    assert_eq!(define.parent().unwrap().kind(), Kind::MathRegion);
    assert_eq!(real.text(), "1");
}

#[test]
fn test_translate_file_and_extract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate.xmcd");
    let mut xml = worksheet(&[r#"<ml:define><ml:id>t</ml:id><ml:real>0.02</ml:real></ml:define>"#]);
    xml = xml.replace(
        "\n</worksheet>",
        &format!(
            "\n  <binaryContent><item item-id=\"1\">{}</item></binaryContent>\n</worksheet>",
            payload::ENCODED
        ),
    );
    std::fs::write(&path, xml).unwrap();

    let options = EmitOptions::for_document(&path);
    let cs = mathsharp::translate_file(&path, &options).unwrap().value;
    assert!(cs.contains("public class plate"));
    assert!(cs.contains("public double t = 0.02;"));

    let out = dir.path().join("Net");
    assert_eq!(mathsharp::xmcd::binary::extract(&out, &path).unwrap(), 1);
    let image = std::fs::read(out.join("bin/plate/item1.png")).unwrap();
    assert_eq!(image, payload::DECODED);
}

/// A fixed base64 attachment.
mod payload {
    pub const ENCODED: &str = "aGVsbG8sIHdvcmtzaGVldA==";
    pub const DECODED: &[u8] = b"hello, worksheet";
}
