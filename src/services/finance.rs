//! Finance context
//!
//! The single source of truth for a session. Constructed once, passed to
//! every consumer by reference, and written through to the key-value store
//! at the end of each mutation.

use tracing::{debug, info, warn};

use crate::error::FinanceResult;
use crate::models::{
    sanitize_budget, AppSettings, Investment, InvestmentDraft, InvestmentId, ThemeMode,
    Transaction, TransactionDraft, TransactionId,
};
use crate::storage::codec::{
    decode_budget, decode_investments, decode_settings, decode_transactions, encode_budget,
    encode_investments, encode_settings, encode_transactions,
};
use crate::storage::{
    keys, read_or_absent, reset_all_data, seed_sample_data_if_needed, KeyValueStore,
};

use super::theme::ThemeSink;

/// Owned copy of the public state, for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSnapshot {
    pub transactions: Vec<Transaction>,
    pub investments: Vec<Investment>,
    pub budget: f64,
    pub settings: AppSettings,
}

/// In-memory finance state synchronized with a key-value store
pub struct FinanceContext<S: KeyValueStore> {
    store: S,
    transactions: Vec<Transaction>,
    investments: Vec<Investment>,
    budget: f64,
    settings: AppSettings,
    dark_mode: bool,
    theme_sink: Option<Box<dyn ThemeSink>>,
}

impl<S: KeyValueStore> FinanceContext<S> {
    /// Seed the store if it has no transactions, then load everything
    pub fn init(store: S) -> Self {
        let mut ctx = Self {
            store,
            transactions: Vec::new(),
            investments: Vec::new(),
            budget: 0.0,
            settings: AppSettings::default(),
            dark_mode: false,
            theme_sink: None,
        };

        ctx.seed();
        ctx.load();
        ctx
    }

    /// Attach a sink that is notified of the current theme now and on every change
    pub fn with_theme_sink(mut self, sink: impl ThemeSink + 'static) -> Self {
        self.theme_sink = Some(Box::new(sink));
        self.apply_theme();
        self
    }

    // --- Reads ---

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Whether renderers should use the dark theme
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn find_investment(&self, id: &InvestmentId) -> Option<&Investment> {
        self.investments.iter().find(|i| &i.id == id)
    }

    /// Copy of the four public fields
    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot {
            transactions: self.transactions.clone(),
            investments: self.investments.clone(),
            budget: self.budget,
            settings: self.settings,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, ending the session
    pub fn into_store(self) -> S {
        self.store
    }

    // --- Transactions ---

    /// Add a transaction at the front of the list and return its new id
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> TransactionId {
        let id = self.fresh_transaction_id();
        self.transactions.insert(0, draft.into_transaction(id.clone()));
        debug!(id = %id, "added transaction");

        self.persist_transactions();
        id
    }

    /// Replace every field but the id; unknown ids are ignored
    ///
    /// Returns whether a record matched.
    pub fn update_transaction(&mut self, id: &TransactionId, draft: TransactionDraft) -> bool {
        let found = match self.transactions.iter_mut().find(|t| &t.id == id) {
            Some(existing) => {
                *existing = draft.into_transaction(id.clone());
                true
            }
            None => false,
        };

        self.persist_transactions();
        found
    }

    /// Remove a transaction; unknown ids are ignored
    pub fn delete_transaction(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        let removed = self.transactions.len() != before;

        self.persist_transactions();
        removed
    }

    // --- Investments ---

    /// Add an investment at the front of the list and return its new id
    pub fn add_investment(&mut self, draft: InvestmentDraft) -> InvestmentId {
        let id = self.fresh_investment_id();
        self.investments.insert(0, draft.into_investment(id.clone()));
        debug!(id = %id, "added investment");

        self.persist_investments();
        id
    }

    /// Replace the investment with the same id; unknown ids are ignored
    pub fn update_investment(&mut self, investment: Investment) -> bool {
        let investment = investment.sanitized();
        let found = match self.investments.iter_mut().find(|i| i.id == investment.id) {
            Some(existing) => {
                *existing = investment;
                true
            }
            None => false,
        };

        self.persist_investments();
        found
    }

    /// Remove an investment; unknown ids are ignored
    pub fn delete_investment(&mut self, id: &InvestmentId) -> bool {
        let before = self.investments.len();
        self.investments.retain(|i| &i.id != id);
        let removed = self.investments.len() != before;

        self.persist_investments();
        removed
    }

    // --- Singletons ---

    /// Replace the budget; missing, non-finite or negative input stores 0
    pub fn set_budget(&mut self, amount: Option<f64>) {
        self.budget = sanitize_budget(amount);
        self.persist(keys::BUDGET, Ok(encode_budget(self.budget)));
    }

    /// Switch theme, persist it and update the dark-mode flag
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.settings.theme = theme;
        self.persist(keys::SETTINGS, encode_settings(&self.settings));
        self.apply_theme();
    }

    /// Clear every persisted key and return to the first-run state
    pub fn reset_data(&mut self) {
        if let Err(e) = reset_all_data(&mut self.store) {
            warn!(error = %e, "reset could not clear every key");
        }
        info!("finance data reset");

        self.seed();
        self.load();
    }

    // --- Internals ---

    fn seed(&mut self) {
        if let Err(e) = seed_sample_data_if_needed(&mut self.store) {
            warn!(error = %e, "sample data not seeded");
        }
    }

    fn load(&mut self) {
        self.transactions =
            decode_transactions(read_or_absent(&self.store, keys::TRANSACTIONS).as_deref());
        self.investments =
            decode_investments(read_or_absent(&self.store, keys::INVESTMENTS).as_deref());
        self.budget = decode_budget(read_or_absent(&self.store, keys::BUDGET).as_deref());
        self.settings = decode_settings(read_or_absent(&self.store, keys::SETTINGS).as_deref());

        debug!(
            transactions = self.transactions.len(),
            investments = self.investments.len(),
            budget = self.budget,
            theme = %self.settings.theme,
            "loaded finance state"
        );

        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        let theme = self.settings.theme;
        self.dark_mode = theme.is_dark();
        if let Some(sink) = self.theme_sink.as_mut() {
            sink.apply_theme(theme);
        }
    }

    fn fresh_transaction_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new();
            if self.find_transaction(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_investment_id(&self) -> InvestmentId {
        loop {
            let id = InvestmentId::new();
            if self.find_investment(&id).is_none() {
                return id;
            }
        }
    }

    fn persist_transactions(&mut self) {
        let encoded = encode_transactions(&self.transactions);
        self.persist(keys::TRANSACTIONS, encoded);
    }

    fn persist_investments(&mut self) {
        let encoded = encode_investments(&self.investments);
        self.persist(keys::INVESTMENTS, encoded);
    }

    /// Fire-and-forget write: failures are logged, in-memory state stands
    fn persist(&mut self, key: &str, encoded: FinanceResult<String>) {
        let result = encoded.and_then(|value| self.store.write(key, &value));
        if let Err(e) = result {
            warn!(key, error = %e, "failed to persist finance state");
        }
    }
}
