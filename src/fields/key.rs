//! Field identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! field_keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Identifier of a field in a [`FieldMap`](super::FieldMap).
        ///
        /// Known fields have their own variant; anything else a form sends is
        /// carried as `Custom`. Keys compare by name, so a `Custom` holding a
        /// known name is the same key as the named variant.
        #[derive(Debug, Clone)]
        pub enum FieldKey {
            $($variant,)*
            Custom(String),
        }

        impl FieldKey {
            /// Every known (non-custom) key.
            pub const KNOWN: &'static [FieldKey] = &[$(FieldKey::$variant),*];

            /// The wire name of this field.
            pub fn as_str(&self) -> &str {
                match self {
                    $(FieldKey::$variant => $name,)*
                    FieldKey::Custom(name) => name,
                }
            }

            /// Resolve a wire name to its key.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $($name => FieldKey::$variant,)*
                    other => FieldKey::Custom(other.to_string()),
                }
            }
        }
    };
}

field_keys! {
    // Tenant input
    NomeLocatario => "nomeLocatario",
    PrimeiroLocatario => "primeiroLocatario",
    SegundoLocatario => "segundoLocatario",
    TerceiroLocatario => "terceiroLocatario",
    QuartoLocatario => "quartoLocatario",
    GeneroLocatario => "generoLocatario",
    QualificacaoCompletaLocatarios => "qualificacaoCompletaLocatarios",
    CpfLocatario => "cpfLocatario",
    RgLocatario => "rgLocatario",
    TelefoneLocatario => "telefoneLocatario",
    CelularLocatario => "celularLocatario",
    EmailLocatario => "emailLocatario",
    CitacaoLocatarios => "citacaoLocatarios",

    // Tenant derived
    IsMultipleLocatarios => "isMultipleLocatarios",
    LocatarioTerm => "locatarioTerm",
    LocatarioTermComercial => "locatarioTermComercial",
    LocatarioTermNoArtigo => "locatarioTermNoArtigo",
    LocatarioTermo => "locatarioTermo",
    LocatarioDocumentacao => "locatarioDocumentacao",
    LocatarioResponsabilidade => "locatarioResponsabilidade",
    LocatarioComunicou => "locatarioComunicou",
    LocatarioIra => "locatarioIra",
    LocatarioPrezado => "locatarioPrezado",
    LocatarioPrezadoWhatsapp => "locatarioPrezadoWhatsapp",
    PrimeiroNomeLocatario => "primeiroNomeLocatario",
    SaudacaoLocatario => "saudacaoLocatario",
    NomeLocatarioFormatado => "nomeLocatarioFormatado",
    TratamentoLocatarioGenero => "tratamentoLocatarioGenero",
    TratamentoLocatarioGeneroPlural => "tratamentoLocatarioGeneroPlural",
    TratamentoLocatarioNotificacao => "tratamentoLocatarioNotificacao",
    NotificadoLocatarioTitulo => "notificadoLocatarioTitulo",

    // Owner input
    NomeProprietario => "nomeProprietario",
    NomesResumidosLocadores => "nomesResumidosLocadores",
    GeneroProprietario => "generoProprietario",
    QualificacaoCompletaLocadores => "qualificacaoCompletaLocadores",
    CpfProprietario => "cpfProprietario",
    RgProprietario => "rgProprietario",
    TelefoneProprietario => "telefoneProprietario",
    CelularProprietario => "celularProprietario",
    EmailProprietario => "emailProprietario",

    // Owner derived
    IsMultipleProprietarios => "isMultipleProprietarios",
    ProprietarioTerm => "proprietarioTerm",
    LocadorTerm => "locadorTerm",
    LocadorTermComercial => "locadorTermComercial",
    ProprietarioPrezado => "proprietarioPrezado",
    ProprietarioPrezadoWhatsapp => "proprietarioPrezadoWhatsapp",
    PrimeiroNomeProprietario => "primeiroNomeProprietario",
    SaudacaoProprietario => "saudacaoProprietario",
    NomeProprietarioFormatado => "nomeProprietarioFormatado",
    TratamentoProprietarioGenero => "tratamentoProprietarioGenero",
    TratamentoLocadorGenero => "tratamentoLocadorGenero",
    QualificacaoCompletaProprietario => "qualificacaoCompletaProprietario",

    // Guarantor input
    NomeFiador => "nomeFiador",
    PrimeiroFiador => "primeiroFiador",
    SegundoFiador => "segundoFiador",
    TerceiroFiador => "terceiroFiador",
    QuartoFiador => "quartoFiador",
    GeneroFiador => "generoFiador",
    TemFiador => "temFiador",

    // Guarantor derived
    Fiadores => "fiadores",
    Fiador1 => "fiador1",
    Fiador2 => "fiador2",
    Fiador3 => "fiador3",
    Fiador4 => "fiador4",
    NomeFiadoresFormatado => "nomeFiadoresFormatado",
    IsMultipleFiadores => "isMultipleFiadores",
    FiadorTerm => "fiadorTerm",

    // Other people named in documents
    NomeQuemRetira => "nomeQuemRetira",
    DocumentoQuemRetira => "documentoQuemRetira",
    AssinanteSelecionado => "assinanteSelecionado",
    NomeGestor => "nomeGestor",
    NomeVistoriador => "nomeVistoriador",
    QualificacaoCompleta => "qualificacaoCompleta",

    // Generic contact and identity fields
    Cpf => "cpf",
    Rg => "rg",
    Telefone => "telefone",
    Celular => "celular",
    Email => "email",

    // Property and contract
    Endereco => "endereco",
    EnderecoImovel => "enderecoImovel",
    Logradouro => "logradouro",
    Rua => "rua",
    NumeroContrato => "numeroContrato",
    PrazoDias => "prazoDias",
    CpflDaev => "cpflDaev",
    QuantidadeChaves => "quantidadeChaves",
    TextoEntregaChaves => "textoEntregaChaves",
    Observacao => "observacao",

    // Dates
    DataAtual => "dataAtual",
    DataComunicacao => "dataComunicacao",
    DataInicioRescisao => "dataInicioRescisao",
    DataTerminoRescisao => "dataTerminoRescisao",
    DataRealizacaoVistoria => "dataRealizacaoVistoria",
    DataFirmamentoContrato => "dataFirmamentoContrato",
    DataVistoria => "dataVistoria",
    DataLiquidacao => "dataLiquidacao",
    MesesComprovantes => "mesesComprovantes",
    SaudacaoComercial => "saudacaoComercial",

    // Utilities and requested documents
    Cpfl => "cpfl",
    StatusAgua => "statusAgua",
    TipoAgua => "tipoAgua",
    SolicitarAgua => "solicitarAgua",
    SolicitarEnergia => "solicitarEnergia",
    SolicitarCondominio => "solicitarCondominio",
    SolicitarGas => "solicitarGas",
    SolicitarCnd => "solicitarCND",
    DocumentosSolicitados => "documentosSolicitados",
}

impl FieldKey {
    /// Whether this key is one the engine knows by name.
    pub fn is_known(&self) -> bool {
        !matches!(FieldKey::from_name(self.as_str()), FieldKey::Custom(_))
    }
}

impl PartialEq for FieldKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FieldKey {}

impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for FieldKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::from_name(name)
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        match FieldKey::from_name(&name) {
            FieldKey::Custom(_) => FieldKey::Custom(name),
            known => known,
        }
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(FieldKey::from)
    }
}
