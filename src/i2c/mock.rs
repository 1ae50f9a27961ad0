//! Bus I2C simulé pour les tests: réponses programmées par registre et
//! journal des transactions.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::{BusError, I2CBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transaction {
    Write { register: u8, value: u8 },
    ReadByte(u8),
    ReadWord(u8),
}

#[derive(Default)]
struct State {
    transactions: Vec<Transaction>,
    writes: HashMap<u8, VecDeque<Result<(), BusError>>>,
    bytes: HashMap<u8, VecDeque<Result<u8, BusError>>>,
    words: HashMap<u8, VecDeque<Result<u16, BusError>>>,
}

/// Les clones partagent le même état: le test garde une copie pour
/// inspecter le trafic après avoir donné l'autre au driver.
#[derive(Clone, Default)]
pub(crate) struct MockBus {
    state: Arc<Mutex<State>>,
}

impl MockBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_write(&self, register: u8, result: Result<(), BusError>) {
        let mut state = self.state.lock().unwrap();
        state.writes.entry(register).or_default().push_back(result);
    }

    pub(crate) fn push_byte(&self, register: u8, result: Result<u8, BusError>) {
        let mut state = self.state.lock().unwrap();
        state.bytes.entry(register).or_default().push_back(result);
    }

    pub(crate) fn push_word(&self, register: u8, result: Result<u16, BusError>) {
        let mut state = self.state.lock().unwrap();
        state.words.entry(register).or_default().push_back(result);
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    pub(crate) fn clear_transactions(&self) {
        self.state.lock().unwrap().transactions.clear();
    }

    pub(crate) fn word_reads(&self) -> Vec<u8> {
        self.transactions()
            .into_iter()
            .filter_map(|t| match t {
                Transaction::ReadWord(register) => Some(register),
                _ => None,
            })
            .collect()
    }
}

impl I2CBus for MockBus {
    fn ecriture_word(&self, command: u8, data: u8) -> Result<(), BusError> {
        let mut state = self.state.lock().unwrap();
        state.transactions.push(Transaction::Write { register: command, value: data });
        state
            .writes
            .get_mut(&command)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(()))
    }

    fn lecture_word(&self, command: u8) -> Result<u8, BusError> {
        let mut state = self.state.lock().unwrap();
        state.transactions.push(Transaction::ReadByte(command));
        state
            .bytes
            .get_mut(&command)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(0))
    }

    fn lecture_dword_le(&self, command: u8) -> Result<u16, BusError> {
        let mut state = self.state.lock().unwrap();
        state.transactions.push(Transaction::ReadWord(command));
        state
            .words
            .get_mut(&command)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_scripted_then_default() {
        let bus = MockBus::new();
        bus.push_byte(0x06, Ok(0x05));
        bus.push_byte(0x06, Err(BusError::Timeout(0x06)));

        assert_eq!(bus.lecture_word(0x06).unwrap(), 0x05);
        assert!(matches!(bus.lecture_word(0x06), Err(BusError::Timeout(0x06))));
        assert_eq!(bus.lecture_word(0x06).unwrap(), 0x00);
    }

    #[test]
    fn test_mock_records_transactions() {
        let bus = MockBus::new();
        let view = bus.clone();
        bus.ecriture_word(0x09, 0x1d).unwrap();
        bus.lecture_dword_le(0x00).unwrap();

        assert_eq!(
            view.transactions(),
            vec![
                Transaction::Write { register: 0x09, value: 0x1d },
                Transaction::ReadWord(0x00),
            ]
        );
        assert_eq!(view.word_reads(), vec![0x00]);

        view.clear_transactions();
        assert!(bus.transactions().is_empty());
    }
}
