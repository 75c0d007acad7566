//! Tests for agreement resolution.

use super::*;
use crate::config::Config;
use crate::fields::{FieldMap, FieldValue};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn resolve(raw: FieldMap) -> FieldMap {
    Resolver::default().resolve(&raw, at(2024, 5, 20, 9))
}

#[test]
fn test_marker_parsing() {
    assert_eq!(GenderMarker::parse(" Feminino "), Some(GenderMarker::Feminino));
    assert_eq!(GenderMarker::parse("MASCULINOS"), Some(GenderMarker::Masculinos));
    assert_eq!(GenderMarker::parse("neutro"), None);
    assert_eq!(GenderMarker::parse(""), None);
}

#[test]
fn test_agreement_resolution() {
    let a = Agreement::resolve(None, false);
    assert_eq!(a, Agreement::MASCULINE_SINGULAR);

    let a = Agreement::resolve(Some(GenderMarker::Femininos), false);
    assert_eq!(a.gender, Gender::Feminine);
    assert!(a.is_plural());

    let a = Agreement::resolve(Some(GenderMarker::Feminino), true);
    assert_eq!(a.gender, Gender::Feminine);
    assert!(a.is_plural());

    let a = Agreement::resolve(None, true);
    assert_eq!(a.gender, DEFAULT_GENDER);
    assert_eq!(a.number, Number::Plural);
}

#[test]
fn test_noun_inflections() {
    let fp = Agreement::resolve(Some(GenderMarker::Femininos), true);
    assert_eq!(LOCATARIO.form(fp), "locatárias");
    assert_eq!(LOCATARIO.heading(fp), "LOCATÁRIAS");
    assert_eq!(LOCATARIO.with_article(fp), "as locatárias");
    assert_eq!(LOCATARIO.of(fp), "das locatárias");
    assert_eq!(LOCADOR.to(fp), "às locadoras");

    let ms = Agreement::MASCULINE_SINGULAR;
    assert_eq!(FIADOR.heading(ms), "FIADOR");
    assert_eq!(PROPRIETARIO.with_article(ms), "o proprietário");
    assert_eq!(LOCADOR.to(ms), "ao locador");
}

#[test]
fn test_two_female_tenants_from_slots() {
    let out = resolve(crate::fields! {
        "primeiroLocatario" => "ana",
        "segundoLocatario" => "beatriz",
        "generoLocatario" => "feminino",
    });

    assert_eq!(out.text("locatarioTerm"), Some("LOCATÁRIAS"));
    assert_eq!(out.text("isMultipleLocatarios"), Some("true"));
    assert_eq!(out.text("saudacaoLocatario"), Some("Prezadas Ana e Beatriz"));
    assert_eq!(out.text("locatarioPrezado"), Some("Prezadas"));
    assert_eq!(out.text("locatarioTermNoArtigo"), Some("as locatárias"));
    assert_eq!(out.text("locatarioTermo"), Some("das locatárias"));
    assert_eq!(out.text("locatarioComunicou"), Some("informaram"));
    assert_eq!(out.text("locatarioIra"), Some("irão"));
    assert_eq!(out.text("tratamentoLocatarioGenero"), Some("suas"));
    assert_eq!(out.text("tratamentoLocatarioNotificacao"), Some("V.Sas"));
    assert_eq!(out.text("notificadoLocatarioTitulo"), Some("Notificadas Locatárias"));
    assert_eq!(out.text("nomeLocatario"), Some("ana e beatriz"));
    assert_eq!(out.text("primeiroNomeLocatario"), Some("Ana"));
    assert_eq!(out.text("terceiroLocatario"), Some(""));
}

#[test]
fn test_defaults_without_names() {
    let out = resolve(FieldMap::new());

    assert_eq!(out.text("isMultipleLocatarios"), Some("false"));
    assert_eq!(out.text("locatarioTerm"), Some("LOCATÁRIO"));
    assert_eq!(out.text("locatarioPrezado"), Some("Prezado"));
    assert_eq!(out.text("nomeLocatario"), Some(TENANT_NAME_PLACEHOLDER));
    assert_eq!(out.text("nomeLocatarioFormatado"), Some(TENANT_NAME_PLACEHOLDER));
    assert_eq!(out.text("primeiroNomeLocatario"), Some(FIRST_NAME_PLACEHOLDER));
    assert_eq!(out.text("saudacaoLocatario"), Some("Prezado [PRIMEIRO NOME]"));
    assert_eq!(out.text("nomeProprietario"), Some(OWNER_NAME_PLACEHOLDER));
    assert_eq!(
        out.text("nomeProprietarioFormatado"),
        Some("<strong>[NOME DO PROPRIETÁRIO]</strong>")
    );
    assert_eq!(out.text("qualificacaoCompletaLocatarios"), Some(FREE_TEXT_PLACEHOLDER));
    assert_eq!(out.text("qualificacaoCompletaProprietario"), Some(FREE_TEXT_PLACEHOLDER));
    assert_eq!(out.text("fiadorTerm"), Some("FIADOR"));
    assert_eq!(out.get("fiadores"), Some(&FieldValue::List(vec![])));
    assert!(!out.contains("nomeFiadoresFormatado"));
}

#[test]
fn test_owner_free_text_detects_plural() {
    let out = resolve(crate::fields! {
        "nomeProprietario" => "Carlos Lima e Rita Dias",
    });

    assert_eq!(out.text("isMultipleProprietarios"), Some("true"));
    assert_eq!(out.text("locadorTerm"), Some("LOCADORES"));
    assert_eq!(out.text("proprietarioTerm"), Some("os proprietários"));
    assert_eq!(out.text("tratamentoProprietarioGenero"), Some("os senhores"));
    assert_eq!(out.text("tratamentoLocadorGenero"), Some("aos locadores"));
    assert_eq!(out.text("saudacaoProprietario"), Some("Prezados Carlos e Rita"));
    assert_eq!(out.text("proprietarioPrezadoWhatsapp"), Some("Carlos e Rita"));
    assert_eq!(
        out.text("nomeProprietarioFormatado"),
        Some("<strong>Carlos Lima</strong> e <strong>Rita Dias</strong>")
    );
    assert_eq!(out.text("nomeProprietario"), Some("Carlos Lima e Rita Dias"));
}

#[test]
fn test_summarized_owner_names_take_priority() {
    let out = resolve(crate::fields! {
        "nomesResumidosLocadores" => "Rita Dias",
        "nomeProprietario" => "Rita Dias e Outros",
        "generoProprietario" => "feminino",
    });

    assert_eq!(out.text("isMultipleProprietarios"), Some("false"));
    assert_eq!(out.text("locadorTerm"), Some("LOCADORA"));
    assert_eq!(out.text("nomeProprietario"), Some("Rita Dias"));
}

#[test]
fn test_plural_marker_forces_plural_for_single_name() {
    let out = resolve(crate::fields! {
        "nomeLocatario" => "Espólio de João Lima",
        "generoLocatario" => "masculinos",
    });
    assert_eq!(out.text("isMultipleLocatarios"), Some("true"));
    assert_eq!(out.text("locatarioTerm"), Some("LOCATÁRIOS"));
    assert_eq!(out.text("nomeLocatario"), Some("Espólio de João Lima"));
}

#[test]
fn test_slots_win_over_free_text() {
    let out = resolve(crate::fields! {
        "nomeLocatario" => "Ana, Bia e Caio",
        "primeiroLocatario" => "Ana Souza",
    });
    assert_eq!(out.text("isMultipleLocatarios"), Some("false"));
    assert_eq!(out.text("nomeLocatarioFormatado"), Some("Ana Souza"));
    // An explicit full name is kept verbatim.
    assert_eq!(out.text("nomeLocatario"), Some("Ana, Bia e Caio"));
}

#[test]
fn test_guarantors() {
    let out = resolve(crate::fields! {
        "primeiroFiador" => "Marcos Reis",
        "segundoFiador" => "Paula Reis",
        "terceiroFiador" => "  ",
    });

    assert_eq!(
        out.get("fiadores"),
        Some(&FieldValue::List(vec!["Marcos Reis".into(), "Paula Reis".into()]))
    );
    assert_eq!(out.text("fiador1"), Some("Marcos Reis"));
    assert_eq!(out.text("fiador2"), Some("Paula Reis"));
    assert_eq!(out.text("fiador3"), Some(""));
    assert_eq!(out.text("isMultipleFiadores"), Some("true"));
    assert_eq!(out.text("fiadorTerm"), Some("FIADORES"));
    assert_eq!(
        out.text("nomeFiadoresFormatado"),
        Some("<strong>Marcos Reis</strong> e <strong>Paula Reis</strong>")
    );
}

#[test]
fn test_guarantors_from_incoming_list() {
    let out = resolve(crate::fields! {
        "fiadores" => vec!["Marcos Reis".to_string(), " ".to_string(), "Paula Reis".to_string()],
        "generoFiador" => "feminino",
    });

    assert_eq!(
        out.get("fiadores"),
        Some(&FieldValue::List(vec!["Marcos Reis".into(), "Paula Reis".into()]))
    );
    assert_eq!(out.text("fiador2"), Some("Paula Reis"));
    assert_eq!(out.text("isMultipleFiadores"), Some("true"));
    assert_eq!(out.text("fiadorTerm"), Some("FIADORAS"));
    assert_eq!(
        out.text("nomeFiadoresFormatado"),
        Some("<strong>Marcos Reis</strong> e <strong>Paula Reis</strong>")
    );
}

#[test]
fn test_guarantors_from_serialized_list() {
    let out = resolve(crate::fields! { "fiadores" => r#"["Carlos Lima","Maria Dias"]"# });

    assert_eq!(
        out.get("fiadores"),
        Some(&FieldValue::List(vec!["Carlos Lima".into(), "Maria Dias".into()]))
    );
    assert_eq!(
        crate::template::render("{{#each fiadores}}{{this}};{{/each}}|{{fiador1}}", &out),
        "Carlos Lima;Maria Dias;|Carlos Lima"
    );
}

#[test]
fn test_guarantor_slots_win_over_incoming_list() {
    let out = resolve(crate::fields! {
        "primeiroFiador" => "Marcos Reis",
        "fiadores" => r#"["Carlos Lima"]"#,
    });
    assert_eq!(out.get("fiadores"), Some(&FieldValue::List(vec!["Marcos Reis".into()])));
    assert_eq!(out.text("isMultipleFiadores"), Some("false"));
}

#[test]
fn test_guarantor_flag_disables_guarantors() {
    let out = resolve(crate::fields! {
        "temFiador" => "nao",
        "primeiroFiador" => "Marcos Reis",
        "nomeFiador" => "Paula Reis",
    });
    assert_eq!(out.get("fiadores"), Some(&FieldValue::List(vec![])));
    assert_eq!(out.text("fiador1"), Some(""));
    assert!(!out.contains("nomeFiadoresFormatado"));

    let enabled = resolve(crate::fields! {
        "temFiador" => "SIM",
        "primeiroFiador" => "Marcos Reis",
    });
    assert_eq!(enabled.text("fiador1"), Some("Marcos Reis"));

    let blank_flag = resolve(crate::fields! {
        "temFiador" => "",
        "primeiroFiador" => "Marcos Reis",
    });
    assert_eq!(blank_flag.text("fiador1"), Some("Marcos Reis"));
}

#[test]
fn test_emphasis_tag_from_config() {
    let config = Config {
        emphasis_tag: String::new(),
        ..Config::default()
    };
    let raw = crate::fields! { "nomeProprietario" => "Carlos Lima, Rita Dias" };
    let out = Resolver::new(&config).resolve(&raw, at(2024, 5, 20, 9));
    assert_eq!(out.text("nomeProprietarioFormatado"), Some("Carlos Lima e Rita Dias"));
}

#[test]
fn test_context_defaults() {
    let out = resolve(FieldMap::new());

    assert_eq!(out.text("dataAtual"), Some("20/05/2024"));
    assert_eq!(out.text("dataVistoria"), Some("20/05/2024"));
    assert_eq!(out.text("mesesComprovantes"), Some("março, abril, maio de 2024"));
    assert_eq!(out.text("saudacaoComercial"), Some("bom dia"));
    assert_eq!(out.text("prazoDias"), Some("30"));
    assert_eq!(out.text("assinanteSelecionado"), Some("[NOME DO ASSINANTE]"));
    assert_eq!(out.text("enderecoImovel"), Some("[ENDEREÇO]"));
    assert_eq!(out.text("cpfl"), Some("SIM"));
    assert_eq!(out.text("statusAgua"), Some("NAO"));
    assert_eq!(out.text("tipoAgua"), Some("DAEV"));
    assert_eq!(out.text("solicitarEnergia"), Some("sim"));
    assert_eq!(out.text("documentosSolicitados"), Some("conta de energia elétrica"));
}

#[test]
fn test_requested_documents() {
    let raw = crate::fields! {
        "solicitarAgua" => "SIM",
        "solicitarGas" => "sim",
        "solicitarCND" => "sim",
        "solicitarCondominio" => "não",
        "endereco" => "Rua A, 10",
        "dataVistoria" => "01/06/2024",
    };
    let out = Resolver::default().resolve(&raw, at(2024, 5, 20, 15));

    assert_eq!(out.text("statusAgua"), Some("SIM"));
    assert_eq!(out.text("solicitarCondominio"), Some("nao"));
    assert_eq!(
        out.text("documentosSolicitados"),
        Some("conta de energia elétrica, conta de água, conta de gás e Certidão Negativa de Débitos (CND)")
    );
    assert_eq!(out.text("enderecoImovel"), Some("Rua A, 10"));
    assert_eq!(out.text("dataVistoria"), Some("01/06/2024"));
    assert_eq!(out.text("saudacaoComercial"), Some("boa tarde"));
}

#[test]
fn test_raw_fields_are_preserved() {
    let out = resolve(crate::fields! { "valorAluguel" => "1500,00" });
    assert_eq!(out.text("valorAluguel"), Some("1500,00"));
}

#[test]
fn test_stale_derived_fields_are_recomputed() {
    let now = at(2024, 5, 20, 9);
    let resolver = Resolver::default();
    let first = resolver.resolve(
        &crate::fields! {
            "primeiroLocatario" => "Ana",
            "segundoLocatario" => "Bia",
        },
        now,
    );
    assert_eq!(first.text("isMultipleLocatarios"), Some("true"));

    let mut edited = first.clone();
    edited.insert("segundoLocatario", "");
    let second = resolver.resolve(&edited, now);
    assert_eq!(second.text("isMultipleLocatarios"), Some("false"));
    assert_eq!(second.text("locatarioTerm"), Some("LOCATÁRIO"));
    assert_eq!(second.text("saudacaoLocatario"), Some("Prezado Ana"));
}

#[test]
fn test_resolution_is_deterministic() {
    let raw = crate::fields! {
        "nomeLocatario" => "Ana Souza\nBruno Lima",
        "generoLocatario" => "masculino",
    };
    assert_eq!(resolve(raw.clone()), resolve(raw));
}
