//! # Recipe models
//!
//! The backend speaks Portuguese on the wire (`titulo`, `ingredientes`,
//! `modo_preparo`, ...). The Rust side uses English field names and maps them
//! with `#[serde(rename)]`.
//!
//! ## [`Recipe`] (read model)
//!
//! What `GET /receitas` and `GET /receitas/<id>` return. Records inserted by
//! this client store ingredients and steps as free text, but records seeded
//! directly into the database store them as string lists, time as text
//! (`"15 minutos"`), and categories in other spellings (`"sobremesas"`). The
//! read model is therefore lenient:
//!
//! - `ingredients` / `preparation_steps` accept text or a list (joined by `\n`);
//! - `preparation_time` / `servings` accept a number or text;
//! - `category` / `difficulty` stay raw strings.
//!
//! ## [`NewRecipe`] (write model)
//!
//! The body of `POST /receitas`. Strictly typed: [`Category`] and
//! [`Difficulty`] are closed enums, numeric fields are integers, and blank
//! optional fields are omitted from the JSON rather than sent empty.

use serde::{Deserialize, Deserializer, Serialize};

/// The five fixed recipe categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Sobremesa")]
    Dessert,
    #[serde(rename = "Carnes")]
    Meat,
    #[serde(rename = "Peixes")]
    Fish,
    #[serde(rename = "Aves")]
    Poultry,
    #[serde(rename = "Saladas")]
    Salad,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Dessert,
        Category::Meat,
        Category::Fish,
        Category::Poultry,
        Category::Salad,
    ];

    /// Wire label, also used as the select option value.
    pub fn label(self) -> &'static str {
        match self {
            Category::Dessert => "Sobremesa",
            Category::Meat => "Carnes",
            Category::Fish => "Peixes",
            Category::Poultry => "Aves",
            Category::Salad => "Saladas",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Recipe difficulty. Defaults to [`Difficulty::Medium`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "fácil")]
    Easy,
    #[default]
    #[serde(rename = "média")]
    Medium,
    #[serde(rename = "difícil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire label: "fácil", "média" or "difícil".
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "fácil",
            Difficulty::Medium => "média",
            Difficulty::Hard => "difícil",
        }
    }

    /// Capitalised label for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Média",
            Difficulty::Hard => "Difícil",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// Filters for `GET /receitas`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeQuery {
    /// Free text matched by the server against title, ingredients and description.
    pub search: Option<String>,
}

impl RecipeQuery {
    /// A query for the given search text. Empty text means "no filter".
    pub fn search(text: &str) -> Self {
        Self {
            search: Some(text.to_string()).filter(|t| !t.is_empty()),
        }
    }

    /// Query-string pairs; absent filters produce no parameter.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("busca", search.as_str()));
        }
        params
    }
}

/// A recipe as returned by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "ingredientes", default, deserialize_with = "text_or_lines")]
    pub ingredients: String,
    #[serde(rename = "modo_preparo", default, deserialize_with = "text_or_lines")]
    pub preparation_steps: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "descricao", default, deserialize_with = "number_or_text")]
    pub description: Option<String>,
    #[serde(rename = "tempo_preparo", default, deserialize_with = "number_or_text")]
    pub preparation_time: Option<String>,
    #[serde(rename = "porcoes", default, deserialize_with = "number_or_text")]
    pub servings: Option<String>,
    #[serde(rename = "dificuldade", default)]
    pub difficulty: Option<String>,
    #[serde(rename = "autor_nome", default)]
    pub author_name: Option<String>,
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<String>,
}

impl Recipe {
    /// Non-blank ingredient lines, trimmed.
    pub fn ingredient_lines(&self) -> Vec<String> {
        non_blank_lines(&self.ingredients)
    }

    /// Non-blank preparation steps in order, trimmed.
    pub fn step_lines(&self) -> Vec<String> {
        non_blank_lines(&self.preparation_steps)
    }

    /// Preparation time in minutes when the server stored a plain number.
    pub fn preparation_minutes(&self) -> Option<u32> {
        self.preparation_time.as_deref()?.trim().parse().ok()
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

fn text_or_lines<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrList>::deserialize(deserializer)? {
        Some(TextOrList::Text(text)) => text,
        Some(TextOrList::List(items)) => items.join("\n"),
        None => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::Text(t)) => Some(t).filter(|t| !t.trim().is_empty()),
        None => None,
    })
}

/// Body of `POST /receitas`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRecipe {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    #[serde(rename = "modo_preparo")]
    pub preparation_steps: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "tempo_preparo", skip_serializing_if = "Option::is_none")]
    pub preparation_time_minutes: Option<u32>,
    #[serde(rename = "porcoes", skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(rename = "dificuldade")]
    pub difficulty: Difficulty,
}

/// Response of a successful `POST /receitas`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreatedRecipe {
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(rename = "receita_id", default)]
    pub id: Option<String>,
}
