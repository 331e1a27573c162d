use tracing::info;

use shared::{AnimalCounts, DashboardSummary, FinanceTotals, STATUS_ACTIVE, TRANSACTION_EXPENSE, TRANSACTION_INCOME};

use crate::config::SummarySpecies;
use crate::domain::error::DomainResult;
use crate::storage::{AnimalRepository, DbConnection, TransactionRepository};

/// Aggregates herd counts and the finance balance for the dashboard
#[derive(Clone)]
pub struct DashboardService {
    animals: AnimalRepository,
    transactions: TransactionRepository,
    species: SummarySpecies,
}

impl DashboardService {
    pub fn new(db: DbConnection, species: SummarySpecies) -> Self {
        Self {
            animals: AnimalRepository::new(db.clone()),
            transactions: TransactionRepository::new(db),
            species,
        }
    }

    pub async fn summary(&self) -> DomainResult<DashboardSummary> {
        let animales = AnimalCounts {
            total: self.animals.count_by_status(STATUS_ACTIVE, None).await?,
            bovinos: self
                .animals
                .count_by_status(STATUS_ACTIVE, Some(self.species.bovine_id))
                .await?,
            equinos: self
                .animals
                .count_by_status(STATUS_ACTIVE, Some(self.species.equine_id))
                .await?,
        };

        // Types other than income and expense are ignored
        let mut ingresos = 0.0;
        let mut gastos = 0.0;
        for (tipo, total) in self.transactions.totals_by_type().await? {
            match tipo.as_str() {
                TRANSACTION_INCOME => ingresos = total,
                TRANSACTION_EXPENSE => gastos = total,
                _ => {}
            }
        }

        let finanzas = FinanceTotals::new(ingresos, gastos);
        info!(
            "Dashboard summary: {} active animals, balance {}",
            animales.total, finanzas.balance
        );

        Ok(DashboardSummary { animales, finanzas })
    }
}
