#![no_main]

use danfe::core::DanfePipeline;
use danfe::nfe::XmlNfeParser;
use danfe::zpl::ZplRenderer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let pipeline = DanfePipeline::new(XmlNfeParser::new(), ZplRenderer::new());
        if let Ok(label) = pipeline.generate(s) {
            // Anything that parses must render a complete label.
            assert!(label.markup().starts_with("^XA"));
            assert!(label.markup().ends_with("^XZ"));
            assert_eq!(label.markup().matches("^XZ").count(), 1);
        }
    }
});
