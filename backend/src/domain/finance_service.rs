use tracing::{info, warn};

use shared::{FinancialTransaction, TransactionRequest};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::TransactionFields;
use crate::storage::{DbConnection, TransactionRepository};

pub const TRANSACTION_NOT_FOUND: &str = "Transacción no encontrada.";

/// Service for the income and expense ledger
#[derive(Clone)]
pub struct FinanceService {
    transactions: TransactionRepository,
}

impl FinanceService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            transactions: TransactionRepository::new(db),
        }
    }

    pub async fn list_transactions(&self) -> DomainResult<Vec<FinancialTransaction>> {
        let transactions = self.transactions.list_transactions().await?;
        info!("Found {} transactions", transactions.len());
        Ok(transactions)
    }

    pub async fn get_transaction(&self, transaction_id: i64) -> DomainResult<FinancialTransaction> {
        self.transactions
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| not_found(transaction_id))
    }

    pub async fn create_transaction(&self, request: TransactionRequest) -> DomainResult<FinancialTransaction> {
        let fields = TransactionFields::from_request(request)?;
        info!("Creating {} transaction: amount={}", fields.tipo_transaccion, fields.monto);

        Ok(self.transactions.store_transaction(&fields).await?)
    }

    pub async fn update_transaction(
        &self,
        transaction_id: i64,
        request: TransactionRequest,
    ) -> DomainResult<FinancialTransaction> {
        let fields = TransactionFields::from_request(request)?;
        info!("Updating transaction {}", transaction_id);

        self.transactions
            .update_transaction(transaction_id, &fields)
            .await?
            .ok_or_else(|| not_found(transaction_id))
    }

    pub async fn delete_transaction(&self, transaction_id: i64) -> DomainResult<()> {
        info!("Deleting transaction {}", transaction_id);

        if self.transactions.delete_transaction(transaction_id).await? {
            Ok(())
        } else {
            Err(not_found(transaction_id))
        }
    }
}

fn not_found(transaction_id: i64) -> DomainError {
    warn!("Transaction not found: {}", transaction_id);
    DomainError::NotFound(TRANSACTION_NOT_FOUND.to_string())
}
