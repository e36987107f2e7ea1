use core::str::FromStr;

/// Main menu as shown before every choice.
pub const MENU: &str = "\n\nMENU\n\
1. Add new item\n\
2. Sell item\n\
3. List items\n\
4. Exit\n\n\
Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    SellItem,
    ListItems,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u8>() {
            Ok(1) => Ok(MenuChoice::AddItem),
            Ok(2) => Ok(MenuChoice::SellItem),
            Ok(3) => Ok(MenuChoice::ListItems),
            Ok(4) => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddItem));
        assert_eq!("2".parse::<MenuChoice>(), Ok(MenuChoice::SellItem));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::ListItems));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["0", "5", "-1", "one", "", "1.0"] {
            assert_eq!(input.parse::<MenuChoice>(), Err(()), "input {input:?}");
        }
    }
}
