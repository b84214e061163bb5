//! Single-use agent definitions.

use std::sync::Arc;

use crate::llm::{CompletionClient, CompletionRequest, ToolGrant};

/// An immutable bundle of persona instruction, optional tool grants, and a
/// model identifier.
///
/// An `Agent` is a configuration value, not a stateful object: it is built,
/// consumed by exactly one call through [`call_agent`], and discarded.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Stable identifier, used for logging
    pub name: &'static str,
    /// Model identifier for the remote call
    pub model: String,
    /// Persona instruction with the stage inputs interpolated
    pub instruction: String,
    /// One-line summary of the agent's role
    pub description: &'static str,
    /// Tools the model may invoke
    pub tools: Vec<ToolGrant>,
}

/// Run an agent against a single user message within a fresh, isolated
/// session and collect the final response text.
pub async fn call_agent(
    client: &Arc<dyn CompletionClient>,
    agent: &Agent,
    message_text: &str,
) -> anyhow::Result<String> {
    tracing::info!(agent = agent.name, "{}", agent.description);

    let request = CompletionRequest {
        model: agent.model.clone(),
        system_instruction: agent.instruction.clone(),
        user_message: message_text.to_string(),
        tools: agent.tools.clone(),
    };

    let response = client.complete(&request).await?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedClient;

    #[test]
    fn call_agent_forwards_the_definition_as_one_request() {
        let client = Arc::new(ScriptedClient::new(vec!["resposta\n"]));
        let as_dyn: Arc<dyn CompletionClient> = client.clone();

        let agent = Agent {
            name: "agente_teste",
            model: "gemini-2.0-flash".to_string(),
            instruction: "Você é um agente de teste.".to_string(),
            description: "Agente de teste.",
            tools: vec![ToolGrant::GoogleSearch],
        };

        let response =
            tokio_test::block_on(call_agent(&as_dyn, &agent, "mensagem do usuário")).unwrap();
        assert_eq!(response, "resposta\n");

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "gemini-2.0-flash");
        assert_eq!(calls[0].system_instruction, "Você é um agente de teste.");
        assert_eq!(calls[0].user_message, "mensagem do usuário");
        assert_eq!(calls[0].tools, vec![ToolGrant::GoogleSearch]);
    }
}
