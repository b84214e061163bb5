//! The four-stage pipeline: analyze, map resources, generate solutions,
//! evaluate solutions.
//!
//! Stages run strictly in sequence; each consumes the full text output of the
//! ones before it. There is no branching, retry, or parallelism, and a failure
//! at any stage aborts the run.

use std::sync::Arc;

use crate::llm::{CompletionClient, ToolGrant};

use super::definition::{call_agent, Agent};
use super::prompt;

/// The collected output of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub analise: String,
    pub recursos: String,
    pub solucoes: String,
    pub avaliacao: String,
}

/// Sequential driver for the four stage agents.
pub struct Pipeline {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl Pipeline {
    pub fn new(client: Arc<dyn CompletionClient>, model: String) -> Self {
        Self { client, model }
    }

    /// Stage 1: structured analysis of the problem (search-augmented).
    pub async fn analyze(&self, problema: &str, area: &str) -> anyhow::Result<String> {
        let prompt = prompt::analyzer_prompt(problema, area);
        let agent = Agent {
            name: "agente_identificador_necessidades",
            model: self.model.clone(),
            instruction: prompt.instruction,
            description: "Agente que aprofunda a compreensão do problema da comunidade.",
            tools: vec![ToolGrant::GoogleSearch],
        };
        call_agent(&self.client, &agent, &prompt.message).await
    }

    /// Stage 2: locally available resources (search-augmented).
    pub async fn map_resources(&self, area: &str, analise: &str) -> anyhow::Result<String> {
        let prompt = prompt::mapper_prompt(area, analise);
        let agent = Agent {
            name: "agente_mapeador_recursos",
            model: self.model.clone(),
            instruction: prompt.instruction,
            description: "Agente que mapeia recursos comunitários relevantes para o problema.",
            tools: vec![ToolGrant::GoogleSearch],
        };
        call_agent(&self.client, &agent, &prompt.message).await
    }

    /// Stage 3: at least three community-actionable solutions.
    pub async fn generate_solutions(
        &self,
        area: &str,
        problema: &str,
        analise: &str,
        recursos: &str,
    ) -> anyhow::Result<String> {
        let prompt = prompt::generator_prompt(area, problema, analise, recursos);
        let agent = Agent {
            name: "agente_gerador_solucoes",
            model: self.model.clone(),
            instruction: prompt.instruction,
            description: "Agente que gera soluções para o problema da comunidade.",
            tools: vec![],
        };
        call_agent(&self.client, &agent, &prompt.message).await
    }

    /// Stage 4: feasibility/impact assessment per solution.
    pub async fn evaluate_solutions(
        &self,
        problema: &str,
        area: &str,
        solucoes: &str,
    ) -> anyhow::Result<String> {
        let prompt = prompt::evaluator_prompt(problema, area, solucoes);
        let agent = Agent {
            name: "agente_avaliador_solucoes",
            model: self.model.clone(),
            instruction: prompt.instruction,
            description: "Agente que avalia a viabilidade e o impacto das soluções propostas.",
            tools: vec![],
        };
        call_agent(&self.client, &agent, &prompt.message).await
    }

    /// Run all four stages in order and collect their outputs.
    pub async fn run(&self, problema: &str, area: &str) -> anyhow::Result<PipelineReport> {
        let analise = self.analyze(problema, area).await?;
        let recursos = self.map_resources(area, &analise).await?;
        let solucoes = self
            .generate_solutions(area, problema, &analise, &recursos)
            .await?;
        let avaliacao = self.evaluate_solutions(problema, area, &solucoes).await?;

        Ok(PipelineReport {
            analise,
            recursos,
            solucoes,
            avaliacao,
        })
    }
}
