//! Legal documents shown in the footer accordion.
//!
//! The three sections are fixed content. `AccordionState` keeps at most one
//! section open, and clicking the open section collapses it.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

/// One legal document panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegalSection {
    Privacy,
    Terms,
    Refund,
}

impl LegalSection {
    /// Display order.
    pub const ALL: [Self; 3] = [Self::Privacy, Self::Terms, Self::Refund];

    /// Stable identifier used for `data-section` attributes.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Terms => "terms",
            Self::Refund => "refund",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Политика конфиденциальности",
            Self::Terms => "Пользовательское соглашение",
            Self::Refund => "Политика возврата",
        }
    }

    #[must_use]
    pub fn intro(self) -> &'static str {
        match self {
            Self::Privacy => {
                "Настоящая политика конфиденциальности определяет порядок обработки и защиты персональных данных пользователей нашего сервиса."
            }
            Self::Terms => "Используя наш сервис, вы соглашаетесь с следующими условиями:",
            Self::Refund => "Условия возврата и обмена цифровых товаров:",
        }
    }

    #[must_use]
    pub fn points(self) -> &'static [&'static str] {
        match self {
            Self::Privacy => &[
                "Мы собираем только необходимую информацию для обработки заказов",
                "Ваши данные надежно защищены и не передаются третьим лицам",
                "Используем шифрование для защиты платежной информации",
                "Вы можете запросить удаление своих данных в любое время",
            ],
            Self::Terms => &[
                "Все ключи являются официальными и лицензионными",
                "Активация ключей происходит только на указанной платформе",
                "Запрещено использование сервиса в мошеннических целях",
                "Мы оставляем за собой право отказать в обслуживании",
            ],
            Self::Refund => &[
                "Возврат возможен в течение 24 часов с момента покупки",
                "Ключ не должен быть активирован для возврата",
                "Возврат денежных средств происходит в течение 3-7 рабочих дней",
                "При технических проблемах гарантируем замену ключа",
            ],
        }
    }
}

/// Single-open, collapsible accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<LegalSection>,
}

impl AccordionState {
    /// Open `section`, closing any other; collapse it if already open.
    pub fn toggle(&mut self, section: LegalSection) {
        self.open = if self.open == Some(section) { None } else { Some(section) };
    }

    #[must_use]
    pub fn is_open(&self, section: LegalSection) -> bool {
        self.open == Some(section)
    }
}
