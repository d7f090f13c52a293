use crate::CATCH_LABEL;

/// A label emitted into the trial sequence.
///
/// Real stimuli are numbered `0..stimuli`; the catch stimulus
/// is a control presentation outside the required transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stimulus {
    Trial(usize),
    Catch,
}

impl Stimulus {
    pub fn is_catch(&self) -> bool {
        matches!(self, Self::Catch)
    }
}

impl From<usize> for Stimulus {
    fn from(n: usize) -> Self {
        Self::Trial(n)
    }
}

impl TryFrom<&str> for Stimulus {
    type Error = crate::EulerError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            CATCH_LABEL => Ok(Self::Catch),
            s => s
                .parse::<usize>()
                .map(Self::Trial)
                .map_err(|_| crate::EulerError::InvalidConfiguration(format!("unknown stimulus {:?}", s))),
        }
    }
}

impl std::fmt::Display for Stimulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trial(n) => write!(f, "{}", n),
            Self::Catch => write!(f, "{}", CATCH_LABEL),
        }
    }
}

impl serde::Serialize for Stimulus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_labels() {
        assert!(Stimulus::try_from("3") == Ok(Stimulus::Trial(3)));
        assert!(Stimulus::try_from("C") == Ok(Stimulus::Catch));
        assert!(Stimulus::try_from("x").is_err());
    }

    #[test]
    fn display_labels() {
        assert!(Stimulus::Trial(12).to_string() == "12");
        assert!(Stimulus::Catch.to_string() == CATCH_LABEL);
    }
}
