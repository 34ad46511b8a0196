//! Read-only lookup endpoints.

use std::fmt;

use esp_sdk_client::Locatable;

use crate::endpoints;

/// A GET-only vocabulary endpoint.
///
/// ```rust,ignore
/// let reply: Reply<serde_json::Value> = client.get(&Vocabulary::Compositions).await?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// All possible composition values.
    Compositions,
    /// Controlled values grouped by submission type. Decodes into
    /// [`ControlledValues`](crate::ControlledValues).
    ControlledValues,
    /// All possible facial expression values.
    Expressions,
    /// The Getty keyword vocabulary.
    Keywords,
    /// All possible values for number of people.
    NumberOfPeople,
    /// Famous personalities.
    Personalities,
    /// Video transcoder mappings. Decodes into
    /// [`TranscoderMappingList`](crate::TranscoderMappingList).
    TranscoderMappings,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 7] = [
        Vocabulary::Compositions,
        Vocabulary::ControlledValues,
        Vocabulary::Expressions,
        Vocabulary::Keywords,
        Vocabulary::NumberOfPeople,
        Vocabulary::Personalities,
        Vocabulary::TranscoderMappings,
    ];

    pub fn as_path(self) -> &'static str {
        match self {
            Vocabulary::Compositions => endpoints::COMPOSITIONS,
            Vocabulary::ControlledValues => endpoints::CONTROLLED_VALUES,
            Vocabulary::Expressions => endpoints::EXPRESSIONS,
            Vocabulary::Keywords => endpoints::KEYWORDS,
            Vocabulary::NumberOfPeople => endpoints::NUMBER_OF_PEOPLE,
            Vocabulary::Personalities => endpoints::PERSONALITIES,
            Vocabulary::TranscoderMappings => endpoints::TRANSCODER_MAPPINGS,
        }
    }
}

impl Locatable for Vocabulary {
    fn path(&self) -> String {
        self.as_path().to_string()
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
