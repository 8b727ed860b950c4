use std::rc::Rc;
use std::str::FromStr;

use shared::models::Category;
use strum::{EnumIter, EnumString, IntoStaticStr};
use yewdux::Context;

use super::resource::{ResourceState, ResourceStore};
use crate::api::AuthenticatedFetch;

const CATEGORIES_KEY: &str = "expense-categories";
const CATEGORIES_PATH: &str = "/category/all/expense";

/// Icon and French label shown for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub icon: &'static str,
    pub name: &'static str,
}

/// Category keys the backend is known to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CategoryKind {
    Transport,
    Restaurant,
    Food,
    Drinks,
    Museum,
    Activity,
    Shopping,
    Groceries,
    Cleaning,
    Housing,
    Flight,
    Coffee,
    Withdrawal,
    Health,
    Gifts,
    Default,
}

impl CategoryKind {
    pub fn info(self) -> CategoryInfo {
        let (icon, name) = match self {
            Self::Transport => ("ic-baseline-directions-car-filled", "Transport"),
            Self::Restaurant => ("ic-baseline-food-bank", "Restaurant"),
            Self::Food => ("ic-baseline-fastfood", "Nourriture"),
            Self::Drinks => ("i-maki:bar", "Boissons"),
            Self::Museum => ("ic-baseline-museum", "Musée"),
            Self::Activity => ("ic-round-location-on", "Activité"),
            Self::Shopping => ("heroicons:sparkles", "Shopping"),
            Self::Groceries => ("ic-baseline-shopping-cart", "Courses"),
            Self::Cleaning => ("heroicons:sparkles", "Nettoyage"),
            Self::Housing => ("ic-baseline-house", "Hôtel"),
            Self::Flight => ("ic-baseline-airplanemode-active", "Vol"),
            Self::Coffee => ("ic-baseline-local-cafe", "Caffé"),
            Self::Withdrawal => ("streamline-ultimate:accounting-coins", "Retrait"),
            Self::Health => ("ic:baseline-local-hospital", "Santé"),
            Self::Gifts => ("ic:outline-card-giftcard", "Cadeaux"),
            Self::Default => ("fluent:animal-turtle-16-filled", "Pas défini"),
        };
        CategoryInfo { icon, name }
    }
}

/// Display entry for a raw key; unknown keys get the default entry.
pub fn category_info(key: &str) -> CategoryInfo {
    CategoryKind::from_str(key)
        .unwrap_or(CategoryKind::Default)
        .info()
}

/// Backend category joined with its display entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedCategory {
    pub id: i64,
    pub name: String,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl From<&Category> for MappedCategory {
    fn from(category: &Category) -> Self {
        let info = category_info(&category.name);
        Self {
            id: category.id,
            name: category.name.clone(),
            display_name: info.name,
            icon: info.icon,
        }
    }
}

/// Maps every fetched category, or `None` while nothing is loaded.
pub fn map_categories(state: &ResourceState<Vec<Category>>) -> Option<Vec<MappedCategory>> {
    state
        .data
        .as_ref()
        .map(|categories| categories.iter().map(MappedCategory::from).collect())
}

/// Expense categories, fetched from `GET /category/all/expense`.
#[derive(Clone)]
pub struct ExpenseCategoriesStore {
    inner: ResourceStore<Vec<Category>>,
}

impl ExpenseCategoriesStore {
    pub fn new(cx: &Context, gateway: Rc<AuthenticatedFetch>) -> Self {
        Self {
            inner: ResourceStore::new(cx, gateway),
        }
    }

    pub fn state(&self) -> Rc<ResourceState<Vec<Category>>> {
        self.inner.state()
    }

    pub async fn fetch_categories(&self) {
        self.inner.fetch(CATEGORIES_KEY, CATEGORIES_PATH).await;
    }

    pub fn mapped_categories(&self) -> Option<Vec<MappedCategory>> {
        map_categories(&self.inner.state())
    }

    pub fn reset(&self) {
        self.inner.reset();
    }
}
