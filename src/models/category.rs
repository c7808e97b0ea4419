/// A tile on the home screen category grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCategory {
    pub name: String,
    pub icon: &'static str,
    pub count: u32,
}

impl CatalogCategory {
    pub fn new(name: &str, icon: &'static str, count: u32) -> Self {
        CatalogCategory {
            name: name.to_string(),
            icon,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStyle {
    Scandinavian,
    Loft,
    Minimalism,
    Eco,
}

impl DesignStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignStyle::Scandinavian => "Скандинавский",
            DesignStyle::Loft => "Лофт",
            DesignStyle::Minimalism => "Минимализм",
            DesignStyle::Eco => "Эко-стиль",
        }
    }

    pub fn all() -> Vec<DesignStyle> {
        vec![
            DesignStyle::Scandinavian,
            DesignStyle::Loft,
            DesignStyle::Minimalism,
            DesignStyle::Eco,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    Settings,
    Notifications,
    Help,
    Terms,
}

impl ProfileMenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileMenuItem::Settings => "Настройки",
            ProfileMenuItem::Notifications => "Уведомления",
            ProfileMenuItem::Help => "Помощь",
            ProfileMenuItem::Terms => "Условия использования",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileMenuItem::Settings => "⚙",
            ProfileMenuItem::Notifications => "🔔",
            ProfileMenuItem::Help => "?",
            ProfileMenuItem::Terms => "📄",
        }
    }

    pub fn all() -> Vec<ProfileMenuItem> {
        vec![
            ProfileMenuItem::Settings,
            ProfileMenuItem::Notifications,
            ProfileMenuItem::Help,
            ProfileMenuItem::Terms,
        ]
    }
}
