//! Tests for the anonymization transform.

use super::*;
use crate::fields::{FieldKey, FieldValue};
use crate::grammar::Resolver;
use chrono::NaiveDate;

#[test]
fn test_anonymize_name() {
    assert_eq!(anonymize_name("Carlos Eduardo Souza"), "Carlos S.");
    assert_eq!(anonymize_name("  ana   lima "), "ana L.");
    assert_eq!(anonymize_name("Madonna"), "Madonna");
    assert_eq!(anonymize_name(""), NAME_MISSING);
    assert_eq!(anonymize_name("   "), NAME_MISSING);
}

#[test]
fn test_anonymize_names_list_keeps_join_rule() {
    assert_eq!(
        anonymize_names_list("Ana Souza, Bruno Lima e Carla Dias"),
        "Ana S., Bruno L. e Carla D."
    );
    assert_eq!(anonymize_names_list("Ana Souza\nBruno Lima"), "Ana S. e Bruno L.");
    assert_eq!(anonymize_names_list(""), NAMES_MISSING);
    assert_eq!(anonymize_names_list(" , "), NAMES_MISSING);
}

#[test]
fn test_anonymize_names_list_keeps_emphasis() {
    assert_eq!(
        anonymize_names_list("<strong>Carlos Lima</strong> e <strong>Rita Dias</strong>"),
        "<strong>Carlos L.</strong> e <strong>Rita D.</strong>"
    );
    assert_eq!(
        anonymize_names_list("<strong>[NOME DO PROPRIETÁRIO]</strong>"),
        "<strong>[NOME DO PROPRIETÁRIO]</strong>"
    );
}

#[test]
fn test_anonymize_address() {
    assert_eq!(
        anonymize_address("Rua das Flores, 123, Centro, São Paulo - SP"),
        "São Paulo - SP"
    );
    assert_eq!(anonymize_address("Av. Brasil 500 Campinas - sp 13000"), "Campinas - SP");
    assert_eq!(anonymize_address("Rua das Flores, 123, Valinhos"), "Valinhos");
    assert_eq!(anonymize_address("Rua das Flores 123"), CITY_UNKNOWN);
    assert_eq!(anonymize_address("Rua das Flores, 123"), CITY_UNKNOWN);
    assert_eq!(anonymize_address("  "), ADDRESS_MISSING);
}

#[test]
fn test_cpf_keeps_only_last_two_digits() {
    let masked = anonymize_cpf("123.456.789-09");
    assert_eq!(masked, "***.***.***-09");
    assert_eq!(masked.chars().filter(char::is_ascii_digit).count(), 2);

    assert_eq!(anonymize_cpf("12345678909"), "***.***.***-09");
    assert_eq!(anonymize_cpf("1234567890"), CPF_INVALID);
    assert_eq!(anonymize_cpf("123456789012"), CPF_INVALID);
    assert_eq!(anonymize_cpf(""), CPF_MISSING);
}

#[test]
fn test_rg_and_mixed_document() {
    assert_eq!(anonymize_rg("12.345.678-9"), "***.***-89");
    assert_eq!(anonymize_rg("1234"), RG_INVALID);
    assert_eq!(anonymize_rg("1234567890123"), RG_INVALID);
    assert_eq!(anonymize_rg(" "), RG_MISSING);

    assert_eq!(anonymize_document("123.456.789-09"), "***.***.***-09");
    assert_eq!(anonymize_document("12.345.678-9"), "***.***-89");
}

#[test]
fn test_phone_and_email() {
    assert_eq!(anonymize_phone("(19) 99876-5432"), "(**) *****-32");
    assert_eq!(anonymize_phone("12345"), PHONE_INVALID);
    assert_eq!(anonymize_phone(""), PHONE_MISSING);

    assert_eq!(anonymize_email("ana.souza@example.com"), "a***@example.com");
    assert_eq!(anonymize_email("ana.souza"), EMAIL_INVALID);
    assert_eq!(anonymize_email("ana@"), EMAIL_INVALID);
    assert_eq!(anonymize_email(""), EMAIL_MISSING);
}

#[test]
fn test_redacted_values_never_contain_braces() {
    assert_eq!(anonymize_name("{{Ana}} Souza"), "Ana S.");
    assert_eq!(anonymize_email("ana@ex{a}mple.com"), "a***@example.com");

    let fields = crate::fields! {
        "nomeLocatario" => "Ana Souza",
        "observacao" => "Falar com {{Ana Souza}}",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(out.text("observacao"), Some("Falar com Ana S."));
}

#[test]
fn test_anonymize_fields_uses_table() {
    let fields = crate::fields! {
        "nomeLocatario" => "Ana Souza e Bruno Lima",
        "primeiroLocatario" => "Ana Souza",
        "cpfLocatario" => "123.456.789-09",
        "enderecoImovel" => "Rua A, 10, Centro, Campinas - SP",
        "emailProprietario" => "rita@example.com",
        "valorAluguel" => "1500,00",
        "fiadores" => vec!["Marcos Reis".to_string(), "Paula Reis".to_string()],
    };
    let out = anonymize_fields(&fields);

    assert_eq!(out.text("nomeLocatario"), Some("Ana S. e Bruno L."));
    assert_eq!(out.text("primeiroLocatario"), Some("Ana S."));
    assert_eq!(out.text("cpfLocatario"), Some("***.***.***-09"));
    assert_eq!(out.text("enderecoImovel"), Some("Campinas - SP"));
    assert_eq!(out.text("emailProprietario"), Some("r***@example.com"));
    assert_eq!(out.text("valorAluguel"), Some("1500,00"));
    assert_eq!(
        out.get("fiadores"),
        Some(&FieldValue::List(vec!["Marcos R.".into(), "Paula R.".into()]))
    );
}

#[test]
fn test_input_is_not_modified() {
    let fields = crate::fields! { "nomeLocatario" => "Ana Souza" };
    let before = fields.clone();
    let _ = anonymize_fields(&fields);
    assert_eq!(fields, before);
}

#[test]
fn test_blank_and_placeholder_values_pass_through() {
    let fields = crate::fields! {
        "terceiroLocatario" => "",
        "nomeLocatario" => "[NOME DO LOCATÁRIO]",
        "cpf" => "  ",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(out.text("terceiroLocatario"), Some(""));
    assert_eq!(out.text("nomeLocatario"), Some("[NOME DO LOCATÁRIO]"));
    assert_eq!(out.text("cpf"), Some("  "));
}

#[test]
fn test_free_text_replaces_known_names_case_insensitively() {
    let fields = crate::fields! {
        "nomeLocatario" => "Ana Souza",
        "nomeProprietario" => "Carlos Lima e Rita Dias",
        "textoEntregaChaves" => "Chaves entregues por CARLOS LIMA e Rita Dias a ana souza.",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(
        out.text("textoEntregaChaves"),
        Some("Chaves entregues por Carlos L. e Rita D. a Ana S.")
    );
}

#[test]
fn test_free_text_prefers_longest_name() {
    let fields = crate::fields! {
        "primeiroLocatario" => "Ana Souza",
        "segundoLocatario" => "Ana Souza Lima",
        "observacao" => "Assina Ana Souza Lima.",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(out.text("observacao"), Some("Assina Ana L."));
}

#[test]
fn test_redaction_table_has_unique_keys() {
    for (i, (key, _)) in REDACTIONS.iter().enumerate() {
        assert!(
            REDACTIONS[i + 1..].iter().all(|(other, _)| other != key),
            "duplicate redaction for {key}"
        );
    }
    assert_eq!(redaction_for(&FieldKey::Cpf), Some(Redaction::Cpf));
    assert_eq!(redaction_for(&FieldKey::from("valorAluguel")), None);
}

#[test]
fn test_anonymizes_resolved_fields() {
    let raw = crate::fields! {
        "primeiroLocatario" => "Ana Souza",
        "segundoLocatario" => "Beatriz Lima",
        "generoLocatario" => "feminino",
        "nomeProprietario" => "Carlos Lima",
    };
    let now = NaiveDate::from_ymd_opt(2024, 5, 20)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let resolved = Resolver::default().resolve(&raw, now);
    let out = anonymize_fields(&resolved);

    assert_eq!(out.text("nomeLocatarioFormatado"), Some("Ana S. e Beatriz L."));
    assert_eq!(
        out.text("nomeProprietarioFormatado"),
        Some("<strong>Carlos L.</strong>")
    );
    assert_eq!(out.text("terceiroLocatario"), Some(""));
    assert_eq!(out.text("locatarioTerm"), Some("LOCATÁRIAS"));
    assert_eq!(out.text("saudacaoLocatario"), Some("Prezadas Ana e Beatriz"));
    assert_eq!(out.get("fiadores"), Some(&FieldValue::List(vec![])));
}

#[test]
fn test_free_text_keeps_single_period_after_name() {
    let fields = crate::fields! {
        "primeiroLocatario" => "Ana Souza",
        "observacao" => "Chaves com Ana Souza. Ana Souza assina",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(out.text("observacao"), Some("Chaves com Ana S. Ana S. assina"));
}

#[test]
fn test_placeholder_shape() {
    assert!(is_placeholder("[NOME DO LOCATÁRIO]"));
    assert!(is_placeholder(" [CPFL/DAEV] "));
    assert!(is_placeholder("[PRIMEIRO NOME]"));
    assert!(!is_placeholder("[]"));
    assert!(!is_placeholder("[Carlos Lima]"));
    assert!(!is_placeholder(r#"["CARLOS LIMA"]"#));
    assert!(!is_placeholder("[ANA, BIA]"));
}

#[test]
fn test_serialized_list_is_redacted_per_element() {
    let fields = crate::fields! {
        "fiadores" => r#"["Carlos Lima", "Maria Dias"]"#,
        "nomeFiador" => r#"["Carlos Lima e Rita Dias"]"#,
    };
    let out = anonymize_fields(&fields);

    let fiadores = out.get("fiadores").and_then(FieldValue::to_list);
    assert_eq!(fiadores, Some(vec!["Carlos L.".to_string(), "Maria D.".to_string()]));
    assert!(out.text("fiadores").is_some());

    let nome = out.get("nomeFiador").and_then(FieldValue::to_list);
    assert_eq!(nome, Some(vec!["Carlos L. e Rita D.".to_string()]));
}

#[test]
fn test_serialized_list_renders_redacted() {
    let fields = crate::fields! { "fiadores" => r#"["Carlos Lima","Maria Dias"]"# };
    let out = anonymize_fields(&fields);
    assert_eq!(
        crate::template::render("{{#each fiadores}}[{{this}}]{{/each}}", &out),
        "[Carlos L.][Maria D.]"
    );
}

#[test]
fn test_free_text_replaces_names_from_guarantor_list() {
    let fields = crate::fields! {
        "fiadores" => FieldValue::List(vec!["Maria Dias".to_string()]),
        "observacao" => "Fiadora: Maria Dias",
    };
    let out = anonymize_fields(&fields);
    assert_eq!(out.text("observacao"), Some("Fiadora: Maria D."));
}
