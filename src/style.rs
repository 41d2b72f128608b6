use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown accent: {0}")]
    UnknownAccent(String),
    #[error("unknown icon: {0}")]
    UnknownIcon(String),
}

/// Utility classes used to paint one accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub gradient: &'static str,
    pub dot: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Accent {
    Coral,
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Coral,
        Accent::Blue,
        Accent::Green,
        Accent::Purple,
        Accent::Orange,
        Accent::Cyan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Coral => "coral",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Cyan => "cyan",
        }
    }

    pub fn descriptor(self) -> StyleDescriptor {
        match self {
            Accent::Coral => StyleDescriptor {
                gradient: "from-coral-400 to-coral-500",
                dot: "bg-coral-500",
                text: "text-coral-500",
            },
            Accent::Blue => StyleDescriptor {
                gradient: "from-blue-400 to-blue-500",
                dot: "bg-blue-500",
                text: "text-blue-500",
            },
            Accent::Green => StyleDescriptor {
                gradient: "from-green-400 to-green-500",
                dot: "bg-green-500",
                text: "text-green-500",
            },
            Accent::Purple => StyleDescriptor {
                gradient: "from-purple-400 to-purple-500",
                dot: "bg-purple-500",
                text: "text-purple-500",
            },
            Accent::Orange => StyleDescriptor {
                gradient: "from-orange-400 to-orange-500",
                dot: "bg-orange-500",
                text: "text-orange-500",
            },
            Accent::Cyan => StyleDescriptor {
                gradient: "from-cyan-400 to-cyan-500",
                dot: "bg-cyan-500",
                text: "text-cyan-500",
            },
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accent {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accent::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| StyleError::UnknownAccent(s.to_string()))
    }
}

impl TryFrom<String> for Accent {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Accent> for String {
    fn from(value: Accent) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Icon {
    Code,
    Server,
    Database,
    Tools,
    Book,
    Award,
    Graduation,
    Github,
    Linkedin,
    Email,
    Phone,
    Location,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Code,
        Icon::Server,
        Icon::Database,
        Icon::Tools,
        Icon::Book,
        Icon::Award,
        Icon::Graduation,
        Icon::Github,
        Icon::Linkedin,
        Icon::Email,
        Icon::Phone,
        Icon::Location,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::Tools => "tools",
            Icon::Book => "book",
            Icon::Award => "award",
            Icon::Graduation => "graduation",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Email => "email",
            Icon::Phone => "phone",
            Icon::Location => "location",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Server => "extra-server",
            Icon::Database => "extra-database",
            Icon::Tools => "extra-tools",
            Icon::Book => "extra-book",
            Icon::Award => "extra-award",
            Icon::Graduation => "extra-graduation",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
        }
    }
}

impl FromStr for Icon {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| StyleError::UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for Icon {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Icon> for String {
    fn from(value: Icon) -> Self {
        value.as_str().to_string()
    }
}
