use criterion::{Criterion, black_box, criterion_group, criterion_main};

use danfe::core::*;
use danfe::nfe::{self, XmlNfeParser};
use danfe::zpl::{ZplRenderer, to_danfe_zpl};

const AUTHORIZED: &str = include_str!("../tests/fixtures/nfe_proc_authorized.xml");

/// The authorized fixture padded with `items` product lines ahead of `<transp>`.
fn nfe_with_items(items: usize) -> String {
    let mut det = String::new();
    for i in 1..=items {
        det.push_str(&format!(
            "<det nItem=\"{i}\"><prod><cProd>{i:06}</cProd><xProd>Item {i}</xProd>\
             <NCM>85183000</NCM><CFOP>5102</CFOP><qCom>1.0000</qCom><vProd>10.00</vProd></prod>\
             <imposto><ICMS><ICMS00><orig>0</orig><CST>00</CST></ICMS00></ICMS></imposto></det>"
        ));
    }
    det.push_str("<transp>");
    AUTHORIZED.replacen("<transp>", &det, 1)
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("nfe_parse", |b| {
        b.iter(|| black_box(nfe::from_nfe_xml(black_box(AUTHORIZED))));
    });
}

fn bench_parse_500_items(c: &mut Criterion) {
    let xml = nfe_with_items(500);
    c.bench_function("nfe_parse_500_items", |b| {
        b.iter(|| black_box(nfe::from_nfe_xml(black_box(&xml))));
    });
}

fn bench_render(c: &mut Criterion) {
    let document = nfe::from_nfe_xml(AUTHORIZED).unwrap();
    c.bench_function("zpl_render", |b| {
        b.iter(|| black_box(to_danfe_zpl(black_box(&document))));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = DanfePipeline::new(XmlNfeParser::new(), ZplRenderer::new());
    c.bench_function("pipeline_generate", |b| {
        b.iter(|| black_box(pipeline.generate(black_box(AUTHORIZED))));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_parse_500_items,
    bench_render,
    bench_pipeline,
);
criterion_main!(benches);
