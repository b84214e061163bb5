//! Interactive console front end.
//!
//! Asks two free-text questions (problem, locality), then drives the four
//! pipeline stages and prints each stage's output as a labeled, block-quoted
//! section. Generic over reader/writer so the whole flow can be exercised
//! against a scripted client in tests.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::agent::Pipeline;
use crate::llm::CompletionClient;
use crate::render::write_section;

const WELCOME: &str = "🤝 Bem-vindo ao Sistema 'Elo Comunitário' 🤝";
const QUESTION_PROBLEM: &str =
    "❓ Qual é o principal problema que você gostaria de resolver em sua comunidade? ";
const QUESTION_AREA: &str = "📍 Em qual localidade/bairro específico esse problema ocorre? ";
const GUIDANCE: &str = "Por favor, informe o problema e a localização.";
const CLOSING: &str = "\n🎉 O sistema 'Elo Comunitário' gerou algumas ideias e avaliações para ajudar a resolver o problema na sua comunidade!";

/// Ask one question and read a single line of free text.
///
/// Only the line terminator is stripped; a whitespace-only answer still
/// counts as provided.
fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Run the interactive console against the given completion client.
///
/// Empty problem or locality prints the guidance message and returns without
/// issuing any remote call. Any stage failure propagates and aborts the run;
/// output from earlier stages is not persisted.
pub async fn run(
    client: Arc<dyn CompletionClient>,
    model: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let problema = ask(input, output, QUESTION_PROBLEM)?;
    let area = ask(input, output, QUESTION_AREA)?;

    if problema.is_empty() || area.is_empty() {
        writeln!(output, "{}", GUIDANCE)?;
        return Ok(());
    }

    let pipeline = Pipeline::new(client, model.to_string());

    writeln!(
        output,
        "\n🤔 Analisando o problema '{}' em {}...",
        problema, area
    )?;
    let analise = pipeline.analyze(&problema, &area).await?;
    write_section(output, "🔍 Análise do Problema", &analise)?;

    writeln!(
        output,
        "\n🗺️ Mapeando os recursos disponíveis em {} para o problema...",
        area
    )?;
    let recursos = pipeline.map_resources(&area, &analise).await?;
    write_section(output, "💡 Recursos Mapeados", &recursos)?;

    writeln!(output, "\n💡 Gerando soluções para o problema...")?;
    let solucoes = pipeline
        .generate_solutions(&area, &problema, &analise, &recursos)
        .await?;
    write_section(output, "✨ Soluções Propostas", &solucoes)?;

    writeln!(output, "\n🧐 Avaliando a viabilidade das soluções...")?;
    let avaliacao = pipeline.evaluate_solutions(&problema, &area, &solucoes).await?;
    write_section(output, "📊 Avaliação das Soluções", &avaliacao)?;

    writeln!(output, "{}", CLOSING)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::llm::testing::ScriptedClient;

    async fn run_console(
        responses: Vec<&str>,
        stdin: &str,
    ) -> (Arc<ScriptedClient>, String) {
        let client = Arc::new(ScriptedClient::new(responses));
        let as_dyn: Arc<dyn CompletionClient> = client.clone();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();

        run(as_dyn, "gemini-2.0-flash", &mut input, &mut output)
            .await
            .expect("console run");

        (client, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn empty_problem_skips_the_pipeline() {
        let (client, output) = run_console(vec![], "\nBairro Central\n").await;

        assert_eq!(client.calls().len(), 0);
        assert_eq!(output.matches(GUIDANCE).count(), 1);
    }

    #[tokio::test]
    async fn empty_area_skips_the_pipeline() {
        let (client, output) = run_console(vec![], "falta de coleta de lixo\n\n").await;

        assert_eq!(client.calls().len(), 0);
        assert_eq!(output.matches(GUIDANCE).count(), 1);
    }

    #[tokio::test]
    async fn both_inputs_empty_print_the_guidance_once() {
        let (client, output) = run_console(vec![], "\n\n").await;

        assert_eq!(client.calls().len(), 0);
        assert_eq!(output.matches(GUIDANCE).count(), 1);
    }

    #[tokio::test]
    async fn full_run_prints_the_four_sections_in_order() {
        let (client, output) = run_console(
            vec![
                "análise gerada",
                "• recurso um\n• recurso dois",
                "três soluções",
                "avaliação final",
            ],
            "falta de coleta de lixo\nBairro Central\n",
        )
        .await;

        let calls = client.calls();
        assert_eq!(calls.len(), 4);
        for call in &calls {
            assert!(call.system_instruction.contains("Bairro Central"));
        }
        assert!(calls[0].system_instruction.contains("falta de coleta de lixo"));

        let headers = [
            "Análise do Problema",
            "Recursos Mapeados",
            "Soluções Propostas",
            "Avaliação das Soluções",
        ];
        let mut last = 0;
        for header in headers {
            let position = output[last..]
                .find(header)
                .unwrap_or_else(|| panic!("missing section header: {}", header));
            last += position;
        }

        // Stage output is block-quoted with bullets normalized.
        assert!(output.contains(">   * recurso um\n>   * recurso dois"));
        assert!(output.contains("> análise gerada"));

        assert!(output.contains(WELCOME));
        assert!(output.contains(CLOSING));
    }

    #[tokio::test]
    async fn frozen_responses_produce_byte_identical_output() {
        let responses = vec!["análise", "recursos", "soluções", "avaliação"];
        let stdin = "falta de coleta de lixo\nBairro Central\n";

        let (_, first) = run_console(responses.clone(), stdin).await;
        let (_, second) = run_console(responses, stdin).await;

        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
