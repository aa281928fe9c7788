//! Отмена фоновых запросов и отбрасывание устаревших ответов

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Токен отмены, привязанный ко времени жизни компонента.
///
/// Компонент отменяет токен при размонтировании; запросы проверяют его
/// перед тем, как записать результат в состояние.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Номер запроса. Применяется только ответ на последний выданный номер.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct TicketCounter(u64);

impl TicketCounter {
    pub fn next(&mut self) -> FetchTicket {
        self.0 += 1;
        FetchTicket(self.0)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.0
    }
}
