//! Gender/number agreement and the role-noun table.

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

/// Gender used when a party has no gender marker.
///
/// Portuguese legal prose uses the masculine as the unmarked form, so an
/// unmarked party reads `o locatário` / `os locatários`.
pub const DEFAULT_GENDER: Gender = Gender::Masculine;

/// Explicit gender marker a form may set for a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderMarker {
    Masculino,
    Feminino,
    Masculinos,
    Femininos,
}

impl GenderMarker {
    /// Parse a marker, ignoring case and surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "masculino" => Some(Self::Masculino),
            "feminino" => Some(Self::Feminino),
            "masculinos" => Some(Self::Masculinos),
            "femininos" => Some(Self::Femininos),
            _ => None,
        }
    }

    pub fn gender(self) -> Gender {
        match self {
            Self::Masculino | Self::Masculinos => Gender::Masculine,
            Self::Feminino | Self::Femininos => Gender::Feminine,
        }
    }

    pub fn is_plural(self) -> bool {
        matches!(self, Self::Masculinos | Self::Femininos)
    }
}

/// The gender and number a party's phrases agree with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    pub gender: Gender,
    pub number: Number,
}

impl Agreement {
    pub const MASCULINE_SINGULAR: Agreement = Agreement {
        gender: Gender::Masculine,
        number: Number::Singular,
    };

    /// Decide agreement from an optional marker and the detected name count.
    ///
    /// A plural marker always yields plural. A singular marker fixes the
    /// gender while plurality still follows detection. Without a marker the
    /// gender is [`DEFAULT_GENDER`].
    pub fn resolve(marker: Option<GenderMarker>, detected_plural: bool) -> Self {
        let gender = marker.map_or(DEFAULT_GENDER, GenderMarker::gender);
        let plural = marker.is_some_and(GenderMarker::is_plural) || detected_plural;
        Agreement {
            gender,
            number: if plural { Number::Plural } else { Number::Singular },
        }
    }

    pub fn is_plural(&self) -> bool {
        self.number == Number::Plural
    }

    /// Pick among the four inflections of a word.
    pub fn select<'a>(&self, ms: &'a str, fs: &'a str, mp: &'a str, fp: &'a str) -> &'a str {
        match (self.gender, self.number) {
            (Gender::Masculine, Number::Singular) => ms,
            (Gender::Feminine, Number::Singular) => fs,
            (Gender::Masculine, Number::Plural) => mp,
            (Gender::Feminine, Number::Plural) => fp,
        }
    }

    /// Definite article: `o/a/os/as`.
    pub fn article(&self) -> &'static str {
        self.select("o", "a", "os", "as")
    }

    /// `de` + article: `do/da/dos/das`.
    pub fn of(&self) -> &'static str {
        self.select("do", "da", "dos", "das")
    }

    /// `a` + article: `ao/à/aos/às`.
    pub fn to(&self) -> &'static str {
        self.select("ao", "à", "aos", "às")
    }

    /// Letter salutation.
    pub fn dear(&self) -> &'static str {
        self.select("Prezado", "Prezada", "Prezados", "Prezadas")
    }

    /// Polite third-person treatment.
    pub fn sir(&self) -> &'static str {
        self.select("o senhor", "a senhora", "os senhores", "as senhoras")
    }

    /// Possessive agreeing with the possessor's number and gender.
    pub fn possessive(&self) -> &'static str {
        self.select("seu", "sua", "seus", "suas")
    }

    /// Possessive for plural things owned by the party.
    pub fn possessive_plural(&self) -> &'static str {
        match self.gender {
            Gender::Masculine => "seus",
            Gender::Feminine => "suas",
        }
    }

    /// Abbreviated formal address used in notifications.
    pub fn formal_address(&self) -> &'static str {
        self.select("V.S", "V.Sa", "V.Ss", "V.Sas")
    }

    /// Past participle heading a notification (`Notificada`).
    pub fn notified(&self) -> &'static str {
        self.select("Notificado", "Notificada", "Notificados", "Notificadas")
    }

    /// Third-person verb form.
    pub fn verb<'a>(&self, singular: &'a str, plural: &'a str) -> &'a str {
        match self.number {
            Number::Singular => singular,
            Number::Plural => plural,
        }
    }
}

/// A role noun with its four inflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    masculine: &'static str,
    feminine: &'static str,
    masculine_plural: &'static str,
    feminine_plural: &'static str,
}

impl Noun {
    pub const fn new(
        masculine: &'static str,
        feminine: &'static str,
        masculine_plural: &'static str,
        feminine_plural: &'static str,
    ) -> Self {
        Self {
            masculine,
            feminine,
            masculine_plural,
            feminine_plural,
        }
    }

    /// Lower-case form for an agreement (`locatárias`).
    pub fn form(&self, agreement: Agreement) -> &'static str {
        agreement.select(
            self.masculine,
            self.feminine,
            self.masculine_plural,
            self.feminine_plural,
        )
    }

    /// Upper-case form used in document headings (`LOCATÁRIAS`).
    pub fn heading(&self, agreement: Agreement) -> String {
        self.form(agreement).to_uppercase()
    }

    /// Article + noun (`as locatárias`).
    pub fn with_article(&self, agreement: Agreement) -> String {
        format!("{} {}", agreement.article(), self.form(agreement))
    }

    /// `de` contraction + noun (`das locatárias`).
    pub fn of(&self, agreement: Agreement) -> String {
        format!("{} {}", agreement.of(), self.form(agreement))
    }

    /// `a` contraction + noun (`às locadoras`).
    pub fn to(&self, agreement: Agreement) -> String {
        format!("{} {}", agreement.to(), self.form(agreement))
    }
}

pub const LOCATARIO: Noun = Noun::new("locatário", "locatária", "locatários", "locatárias");
pub const LOCADOR: Noun = Noun::new("locador", "locadora", "locadores", "locadoras");
pub const PROPRIETARIO: Noun =
    Noun::new("proprietário", "proprietária", "proprietários", "proprietárias");
pub const FIADOR: Noun = Noun::new("fiador", "fiadora", "fiadores", "fiadoras");
