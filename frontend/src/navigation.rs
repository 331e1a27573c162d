/// The page currently shown. Pages that take an id are remounted when it
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Dashboard,
    Animals,
    NewAnimal,
    AnimalDetail(i64),
    EditAnimal(i64),
    Finances,
    Production,
    EditProduction(i64),
}

impl Page {
    /// The sidebar entry a page belongs to
    pub fn section(&self) -> Page {
        match self {
            Page::Dashboard => Page::Dashboard,
            Page::Animals | Page::NewAnimal | Page::AnimalDetail(_) | Page::EditAnimal(_) => Page::Animals,
            Page::Finances => Page::Finances,
            Page::Production | Page::EditProduction(_) => Page::Production,
        }
    }

    /// Key that changes whenever the page must remount
    pub fn key(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_groups_sub_pages() {
        assert_eq!(Page::EditAnimal(3).section(), Page::Animals);
        assert_eq!(Page::NewAnimal.section(), Page::Animals);
        assert_eq!(Page::EditProduction(1).section(), Page::Production);
        assert_eq!(Page::Finances.section(), Page::Finances);
    }

    #[test]
    fn test_key_distinguishes_ids() {
        assert_ne!(Page::AnimalDetail(1).key(), Page::AnimalDetail(2).key());
        assert_ne!(Page::AnimalDetail(1).key(), Page::EditAnimal(1).key());
    }
}
