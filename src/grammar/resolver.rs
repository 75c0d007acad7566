//! Derived-field computation.

use super::agreement::PROPRIETARIO;
use super::party::{NameSource, Party, Role};
use crate::config::Config;
use crate::dates::{business_greeting, format_local_date, last_three_months};
use crate::fields::{FieldKey, FieldMap, FieldValue};
use crate::names::{capitalize_first, join_emphasized, join_names};
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{debug, trace};

pub const FIRST_NAME_PLACEHOLDER: &str = "[PRIMEIRO NOME]";
pub const TENANT_NAME_PLACEHOLDER: &str = "[NOME DO LOCATÁRIO]";
pub const OWNER_NAME_PLACEHOLDER: &str = "[NOME DO PROPRIETÁRIO]";
pub const FREE_TEXT_PLACEHOLDER: &str = "[TEXTOLIVRE]";

const DEFAULT_NOTICE_DAYS: &str = "30";
const DEFAULT_WATER_PROVIDER: &str = "DAEV";

/// Date fields that default to the reference date when not filled.
const DATES_DEFAULTING_TO_TODAY: &[FieldKey] = &[
    FieldKey::DataComunicacao,
    FieldKey::DataInicioRescisao,
    FieldKey::DataTerminoRescisao,
    FieldKey::DataRealizacaoVistoria,
    FieldKey::DataFirmamentoContrato,
    FieldKey::DataVistoria,
    FieldKey::DataLiquidacao,
];

/// Text fields replaced by a placeholder when not filled.
const PLACEHOLDER_DEFAULTS: &[(FieldKey, &str)] = &[
    (FieldKey::AssinanteSelecionado, "[NOME DO ASSINANTE]"),
    (FieldKey::NumeroContrato, "[NÚMERO DO CONTRATO]"),
    (FieldKey::CpflDaev, "[CPFL/DAEV]"),
    (FieldKey::QuantidadeChaves, "[QUANTIDADE DE CHAVES]"),
];

/// Computes agreement and derived fields from raw contract fields.
#[derive(Debug, Clone)]
pub struct Resolver {
    emphasis_tag: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Self {
            emphasis_tag: config.emphasis_tag.clone(),
        }
    }

    /// Resolve against the current local time.
    pub fn resolve_now(&self, raw: &FieldMap) -> FieldMap {
        self.resolve(raw, Local::now().naive_local())
    }

    /// Resolve raw fields into a dictionary ready for templating.
    ///
    /// `now` supplies the reference date for date defaults and the hour for
    /// the business greeting. Raw fields are copied through; derived fields
    /// are always recomputed and overwrite any stale value in `raw`.
    pub fn resolve(&self, raw: &FieldMap, now: NaiveDateTime) -> FieldMap {
        let mut out = raw.clone();

        let tenant = Party::from_fields(Role::Tenant, raw);
        let owner = Party::from_fields(Role::Owner, raw);
        let guarantor = Party::from_fields(Role::Guarantor, raw);

        debug!(
            tenants = tenant.names.len(),
            owners = owner.names.len(),
            guarantors = guarantor.names.len(),
            tenant_plural = tenant.is_plural(),
            owner_plural = owner.is_plural(),
            "resolving agreement fields"
        );

        self.resolve_tenant(&tenant, raw, &mut out);
        self.resolve_owner(&owner, raw, &mut out);
        self.resolve_guarantor(&guarantor, &mut out);
        resolve_contract_context(raw, now, &mut out);

        trace!(fields = out.len(), "resolution complete");
        out
    }

    fn resolve_tenant(&self, party: &Party, raw: &FieldMap, out: &mut FieldMap) {
        let a = party.agreement;
        let noun = party.noun();

        out.insert(FieldKey::IsMultipleLocatarios, party.is_plural().to_string());
        out.insert(FieldKey::LocatarioTerm, noun.heading(a));
        out.insert(FieldKey::LocatarioTermComercial, noun.form(a));
        out.insert(FieldKey::LocatarioTermNoArtigo, noun.with_article(a));
        out.insert(FieldKey::LocatarioTermo, noun.of(a));
        out.insert(FieldKey::LocatarioDocumentacao, noun.of(a));
        out.insert(FieldKey::LocatarioResponsabilidade, noun.of(a));
        out.insert(FieldKey::LocatarioComunicou, a.verb("informou", "informaram"));
        out.insert(FieldKey::LocatarioIra, a.verb("irá", "irão"));
        out.insert(FieldKey::LocatarioPrezado, a.dear());
        out.insert(
            FieldKey::LocatarioPrezadoWhatsapp,
            party.first_names_joined(FIRST_NAME_PLACEHOLDER),
        );
        out.insert(FieldKey::PrimeiroNomeLocatario, leading_first_name(party));
        out.insert(FieldKey::SaudacaoLocatario, party.greeting(FIRST_NAME_PLACEHOLDER));
        out.insert(
            FieldKey::NomeLocatarioFormatado,
            joined_or(&party.names, TENANT_NAME_PLACEHOLDER),
        );

        let full_name = match raw.filled(FieldKey::NomeLocatario) {
            Some(name) => name.to_string(),
            None if party.source == NameSource::Slots => join_names(&party.names),
            None => TENANT_NAME_PLACEHOLDER.to_string(),
        };
        out.insert(FieldKey::NomeLocatario, full_name);

        for key in Role::Tenant.slot_keys() {
            let value = raw.filled(key).unwrap_or_default().to_string();
            out.insert(key, value);
        }

        out.insert(FieldKey::TratamentoLocatarioGenero, a.possessive());
        out.insert(FieldKey::TratamentoLocatarioGeneroPlural, a.possessive_plural());
        out.insert(FieldKey::TratamentoLocatarioNotificacao, a.formal_address());
        out.insert(
            FieldKey::NotificadoLocatarioTitulo,
            format!("{} {}", a.notified(), capitalize_first(noun.form(a))),
        );
        out.insert(
            FieldKey::QualificacaoCompletaLocatarios,
            raw.filled(FieldKey::QualificacaoCompletaLocatarios)
                .unwrap_or(FREE_TEXT_PLACEHOLDER),
        );
    }

    fn resolve_owner(&self, party: &Party, raw: &FieldMap, out: &mut FieldMap) {
        let a = party.agreement;
        let noun = party.noun();

        out.insert(FieldKey::IsMultipleProprietarios, party.is_plural().to_string());
        out.insert(FieldKey::ProprietarioTerm, PROPRIETARIO.with_article(a));
        out.insert(FieldKey::LocadorTerm, noun.heading(a));
        out.insert(FieldKey::LocadorTermComercial, noun.form(a));
        out.insert(FieldKey::ProprietarioPrezado, a.dear());
        out.insert(
            FieldKey::ProprietarioPrezadoWhatsapp,
            party.first_names_joined(FIRST_NAME_PLACEHOLDER),
        );
        out.insert(FieldKey::PrimeiroNomeProprietario, leading_first_name(party));
        out.insert(FieldKey::SaudacaoProprietario, party.greeting(FIRST_NAME_PLACEHOLDER));

        let formatted = if party.names.is_empty() {
            join_emphasized(&[OWNER_NAME_PLACEHOLDER], &self.emphasis_tag)
        } else {
            join_emphasized(&party.names, &self.emphasis_tag)
        };
        out.insert(FieldKey::NomeProprietarioFormatado, formatted);

        let full_name = Role::Owner
            .free_text_keys()
            .iter()
            .find_map(|key| raw.filled(key))
            .unwrap_or(OWNER_NAME_PLACEHOLDER);
        out.insert(FieldKey::NomeProprietario, full_name);

        out.insert(FieldKey::TratamentoProprietarioGenero, a.sir());
        out.insert(FieldKey::TratamentoLocadorGenero, noun.to(a));
        out.insert(
            FieldKey::QualificacaoCompletaProprietario,
            raw.filled(FieldKey::QualificacaoCompletaLocadores)
                .unwrap_or(FREE_TEXT_PLACEHOLDER),
        );
    }

    fn resolve_guarantor(&self, party: &Party, out: &mut FieldMap) {
        let a = party.agreement;

        out.insert(FieldKey::Fiadores, FieldValue::List(party.names.clone()));
        out.insert(FieldKey::IsMultipleFiadores, party.is_plural().to_string());
        out.insert(FieldKey::FiadorTerm, party.noun().heading(a));

        let numbered = [
            FieldKey::Fiador1,
            FieldKey::Fiador2,
            FieldKey::Fiador3,
            FieldKey::Fiador4,
        ];
        for (i, key) in numbered.into_iter().enumerate() {
            let name = party.names.get(i).cloned().unwrap_or_default();
            out.insert(key, name);
        }

        if party.names.is_empty() {
            out.remove(FieldKey::NomeFiadoresFormatado);
        } else {
            out.insert(
                FieldKey::NomeFiadoresFormatado,
                join_emphasized(&party.names, &self.emphasis_tag),
            );
        }
    }
}

/// Dates, defaults and utility flags that do not depend on any party.
fn resolve_contract_context(raw: &FieldMap, now: NaiveDateTime, out: &mut FieldMap) {
    let today = now.date();
    let today_text = format_local_date(today);

    out.insert(FieldKey::DataAtual, today_text.clone());
    out.insert(FieldKey::MesesComprovantes, last_three_months(today));
    out.insert(FieldKey::SaudacaoComercial, business_greeting(now.hour()));

    for key in DATES_DEFAULTING_TO_TODAY {
        let value = raw.filled(key).map_or_else(|| today_text.clone(), str::to_string);
        out.insert(key, value);
    }

    out.insert(
        FieldKey::PrazoDias,
        raw.filled(FieldKey::PrazoDias).unwrap_or(DEFAULT_NOTICE_DAYS),
    );

    for &(ref key, placeholder) in PLACEHOLDER_DEFAULTS {
        out.insert(key, raw.filled(key).unwrap_or(placeholder));
    }

    let address = raw
        .filled(FieldKey::Endereco)
        .or_else(|| raw.filled(FieldKey::EnderecoImovel))
        .unwrap_or("[ENDEREÇO]");
    out.insert(FieldKey::EnderecoImovel, address);

    // Electricity bills are always requested.
    let water = yes_no(raw.filled(FieldKey::SolicitarAgua));
    let condo = yes_no(raw.filled(FieldKey::SolicitarCondominio));
    let gas = yes_no(raw.filled(FieldKey::SolicitarGas));
    let cnd = yes_no(raw.filled(FieldKey::SolicitarCnd));

    out.insert(FieldKey::Cpfl, "SIM");
    out.insert(FieldKey::StatusAgua, if water == "sim" { "SIM" } else { "NAO" });
    out.insert(
        FieldKey::TipoAgua,
        raw.filled(FieldKey::TipoAgua).unwrap_or(DEFAULT_WATER_PROVIDER),
    );
    out.insert(FieldKey::SolicitarEnergia, "sim");
    out.insert(FieldKey::SolicitarAgua, water);
    out.insert(FieldKey::SolicitarCondominio, condo);
    out.insert(FieldKey::SolicitarGas, gas);
    out.insert(FieldKey::SolicitarCnd, cnd);

    let requested: Vec<&str> = [
        (true, "conta de energia elétrica"),
        (water == "sim", "conta de água"),
        (condo == "sim", "boleto de condomínio"),
        (gas == "sim", "conta de gás"),
        (cnd == "sim", "Certidão Negativa de Débitos (CND)"),
    ]
    .into_iter()
    .filter_map(|(wanted, label)| wanted.then_some(label))
    .collect();
    out.insert(FieldKey::DocumentosSolicitados, join_names(&requested));
}

fn yes_no(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if v.eq_ignore_ascii_case("sim") => "sim",
        _ => "nao",
    }
}

fn leading_first_name(party: &Party) -> String {
    party
        .first_names()
        .into_iter()
        .next()
        .unwrap_or_else(|| FIRST_NAME_PLACEHOLDER.to_string())
}

fn joined_or(names: &[String], placeholder: &str) -> String {
    if names.is_empty() {
        placeholder.to_string()
    } else {
        join_names(names)
    }
}
