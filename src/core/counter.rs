#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increase,
    Decrease,
}

/// 每個商品卡片自己的數量與按鈕 hover 狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCounter {
    quantity: u32,
    increase_hover: bool,
    decrease_hover: bool,
}

impl ItemCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// 數量為 0 時不做任何事
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    /// 減少按鈕只有在數量大於 0 時可以按
    pub fn can_decrement(&self) -> bool {
        self.quantity > 0
    }

    pub fn press(&mut self, button: Button) {
        match button {
            Button::Increase => self.increment(),
            Button::Decrease => self.decrement(),
        }
    }

    pub fn pointer_enter(&mut self, button: Button) {
        self.set_hover(button, true);
    }

    pub fn pointer_leave(&mut self, button: Button) {
        self.set_hover(button, false);
    }

    pub fn is_hovering(&self, button: Button) -> bool {
        match button {
            Button::Increase => self.increase_hover,
            Button::Decrease => self.decrease_hover,
        }
    }

    fn set_hover(&mut self, button: Button, hovering: bool) {
        match button {
            Button::Increase => self.increase_hover = hovering,
            Button::Decrease => self.decrease_hover = hovering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut counter = ItemCounter::new();
        assert!(!counter.can_decrement());

        counter.decrement();
        assert_eq!(counter.quantity(), 0);
        assert!(!counter.can_decrement());
    }

    #[test]
    fn test_increment_enables_decrement() {
        let mut counter = ItemCounter::new();
        counter.increment();
        assert_eq!(counter.quantity(), 1);
        assert!(counter.can_decrement());

        counter.press(Button::Increase);
        counter.press(Button::Decrease);
        counter.press(Button::Decrease);
        counter.press(Button::Decrease);
        assert_eq!(counter.quantity(), 0);
        assert!(!counter.can_decrement());
    }

    #[test]
    fn test_hover_flags_are_independent() {
        let mut counter = ItemCounter::new();
        counter.pointer_enter(Button::Increase);
        assert!(counter.is_hovering(Button::Increase));
        assert!(!counter.is_hovering(Button::Decrease));

        counter.pointer_enter(Button::Decrease);
        counter.pointer_leave(Button::Increase);
        assert!(!counter.is_hovering(Button::Increase));
        assert!(counter.is_hovering(Button::Decrease));
        assert_eq!(counter.quantity(), 0);
    }
}
