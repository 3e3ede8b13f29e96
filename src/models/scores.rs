//! Fixed-field per-category records.
//!
//! Score vectors are plain structs with one field per [`Category`] rather than
//! maps, so adding a category is a compile error everywhere it matters.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// One value per content category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerCategory<T> {
    pub violence: T,
    pub gore: T,
    pub sex_act: T,
    pub nudity: T,
    pub profanity: T,
    pub drugs: T,
    pub child_risk: T,
}

/// Severity per category. Values are in `[0, 1]`, except `child_risk`, which
/// may exceed 1 after amplification (see [`CategoryScores::display`]).
pub type CategoryScores = PerCategory<f64>;

/// Match counts per category.
pub type CategoryCounts = PerCategory<usize>;

impl<T> PerCategory<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Violence => &self.violence,
            Category::Gore => &self.gore,
            Category::SexAct => &self.sex_act,
            Category::Nudity => &self.nudity,
            Category::Profanity => &self.profanity,
            Category::Drugs => &self.drugs,
            Category::ChildRisk => &self.child_risk,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Violence => &mut self.violence,
            Category::Gore => &mut self.gore,
            Category::SexAct => &mut self.sex_act,
            Category::Nudity => &mut self.nudity,
            Category::Profanity => &mut self.profanity,
            Category::Drugs => &mut self.drugs,
            Category::ChildRisk => &mut self.child_risk,
        }
    }

    /// Build a record by evaluating `f` for every category.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            violence: f(Category::Violence),
            gore: f(Category::Gore),
            sex_act: f(Category::SexAct),
            nudity: f(Category::Nudity),
            profanity: f(Category::Profanity),
            drugs: f(Category::Drugs),
            child_risk: f(Category::ChildRisk),
        }
    }

    /// Like [`from_fn`](Self::from_fn), stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Category) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            violence: f(Category::Violence)?,
            gore: f(Category::Gore)?,
            sex_act: f(Category::SexAct)?,
            nudity: f(Category::Nudity)?,
            profanity: f(Category::Profanity)?,
            drugs: f(Category::Drugs)?,
            child_risk: f(Category::ChildRisk)?,
        })
    }

    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> PerCategory<U> {
        PerCategory::from_fn(|category| f(category, self.get(category)))
    }

    /// Iterate `(category, value)` pairs in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl CategoryScores {
    /// Scores clamped to `[0, 1]` for presentation.
    pub fn display(&self) -> CategoryScores {
        self.map(|_, v| v.clamp(0.0, 1.0))
    }

    /// Highest display-clamped severity over all categories.
    pub fn peak(&self) -> f64 {
        self.display().iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| *v == 0.0)
    }
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.iter().map(|(_, v)| *v).sum()
    }

    pub fn add(&mut self, other: &CategoryCounts) {
        for category in Category::ALL {
            *self.get_mut(category) += *other.get(category);
        }
    }
}
