use crate::utils::error::{AbsenceKind, MaybeError};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

/// Decides which failures a [`Maybe`](crate::Maybe) chain turns into absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsencePolicy {
    pub(crate) recognized: BTreeSet<AbsenceKind>,
    pub name_falls_back_to_attribute: bool,
    pub negative_indices: bool,
}

impl Default for AbsencePolicy {
    fn default() -> Self {
        Self {
            recognized: AbsenceKind::ALL.into_iter().collect(),
            name_falls_back_to_attribute: true,
            negative_indices: true,
        }
    }
}

impl AbsencePolicy {
    /// 不把任何失敗視為缺值，所有錯誤都會往外傳遞
    pub fn strict() -> Self {
        Self {
            recognized: BTreeSet::new(),
            ..Self::default()
        }
    }

    pub fn with_recognized<I>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = AbsenceKind>,
    {
        self.recognized = kinds.into_iter().collect();
        self
    }

    pub fn without(mut self, kind: AbsenceKind) -> Self {
        self.recognized.remove(&kind);
        self
    }

    pub fn recognized(&self) -> impl Iterator<Item = AbsenceKind> + '_ {
        self.recognized.iter().copied()
    }

    pub fn recognizes(&self, err: &MaybeError) -> bool {
        err.absence_kind()
            .is_some_and(|kind| self.recognized.contains(&kind))
    }

    /// 行程共用的預設策略
    pub fn shared_default() -> Arc<AbsencePolicy> {
        static DEFAULT: OnceLock<Arc<AbsencePolicy>> = OnceLock::new();
        DEFAULT
            .get_or_init(|| Arc::new(AbsencePolicy::default()))
            .clone()
    }
}
