use std::path::PathBuf;

use chrono::NaiveDate;
use danfe::core::*;
use danfe::facade::DanfeGenerator;
use danfe::zpl::to_danfe_zpl;

fn main() {
    let generator = DanfeGenerator::new();
    let output = std::env::temp_dir().join("danfe_generated.zpl");

    // With an XML path argument, render that file; otherwise a built-in NFe.
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        let label = generator.generate_from_path(&path).unwrap();
        println!("{}", label.summary());
        generator.save(&label, &output).unwrap();
        println!("DANFE salva em: {}", output.display());
        return;
    }

    let issued_at = NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let nfe = NfeDocumentBuilder::new(
        "123",
        "1",
        "35250912345678000199550010000001231000001234",
        issued_at,
    )
    .issuer(
        IssuerBuilder::new("12345678000199", "ACME Comercio LTDA", "SP")
            .trade_name("ACME")
            .state_registration("123456789012")
            .build()
            .unwrap(),
    )
    .recipient(
        RecipientBuilder::new(TaxIdKind::Cpf, "12345678901", "João da Silva", "RJ")
            .build()
            .unwrap(),
    )
    .authorization(
        Authorization::new(
            "135250001234567",
            NaiveDate::from_ymd_opt(2025, 9, 1)
                .unwrap()
                .and_hms_opt(10, 35, 12)
                .unwrap(),
        )
        .unwrap(),
    )
    .build()
    .unwrap();

    println!("{}", nfe.summary());
    println!("Chave: {}", format_access_key(nfe.access_key()));
    println!();
    println!("{}", to_danfe_zpl(&nfe).unwrap());
}
