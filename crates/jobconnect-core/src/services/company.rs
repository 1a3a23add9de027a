use std::sync::Arc;

use crate::domain::{Company, CompanyPatch, NewCompany, is_blank};
use crate::error::{DomainError, DomainResult};
use crate::ports::{CompanyRepository, JobRepository};

use super::job::{JobView, job_views};

pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    jobs: Arc<dyn JobRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>, jobs: Arc<dyn JobRepository>) -> Self {
        Self { companies, jobs }
    }

    pub async fn create_company(&self, input: NewCompany) -> DomainResult<Company> {
        if is_blank(Some(&input.name)) {
            return Err(DomainError::Validation(
                "Company name is required".to_string(),
            ));
        }
        let saved = self.companies.save(Company::new(input)).await?;
        tracing::info!(company_id = saved.id, name = %saved.name, "Company created");
        Ok(saved)
    }

    pub async fn companies(&self) -> DomainResult<Vec<Company>> {
        Ok(self.companies.find_all().await?)
    }

    pub async fn company(&self, id: i64) -> DomainResult<Company> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company", id))
    }

    pub async fn update_company(&self, id: i64, patch: CompanyPatch) -> DomainResult<Company> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(DomainError::Validation(
                "Company name cannot be blank".to_string(),
            ));
        }
        let mut company = self.company(id).await?;
        company.apply(patch);
        Ok(self.companies.save(company).await?)
    }

    pub async fn delete_company(&self, id: i64) -> DomainResult<()> {
        if !self.companies.exists(id).await? {
            return Err(DomainError::not_found("Company", id));
        }
        self.companies.delete(id).await?;
        tracing::info!(company_id = id, "Company deleted");
        Ok(())
    }

    pub async fn company_jobs(&self, id: i64) -> DomainResult<Vec<JobView>> {
        let company = self.company(id).await?;
        let jobs = self.jobs.find_by_company(id).await?;
        Ok(job_views(jobs, &[company]))
    }
}
