//! Persona instructions and user messages for the four pipeline stages.
//!
//! Each builder interpolates its inputs verbatim into a fixed template, so a
//! later stage's instruction always carries the exact text produced by the
//! stages before it.

/// The instruction/message pair submitted for one stage.
#[derive(Debug, Clone)]
pub struct StagePrompt {
    /// Persona instruction for the agent
    pub instruction: String,
    /// Synthesized user message the agent is run against
    pub message: String,
}

/// Stage 1: analyze the reported problem in its locality.
pub fn analyzer_prompt(problema: &str, area: &str) -> StagePrompt {
    StagePrompt {
        instruction: format!(
            r#"Você é um especialista em analisar o seguinte problema relatado na comunidade de {area}: "{problema}".
Sua tarefa é usar a ferramenta de busca do Google (google_search) para entender melhor esse problema específico no contexto de {area}.
Busque por informações sobre:
- Causas comuns desse tipo de problema.
- Impactos na comunidade.
- Iniciativas semelhantes que foram implementadas com sucesso em outras localidades.
Identifique até 3 aspectos chave do problema que precisam ser abordados para encontrar soluções eficazes na comunidade de {area}."#
        ),
        message: format!(
            "Problema: {problema} na comunidade de {area}. Causas, impactos, soluções em outras comunidades."
        ),
    }
}

/// Stage 2: map locally available resources, given the analysis.
pub fn mapper_prompt(area: &str, analise: &str) -> StagePrompt {
    StagePrompt {
        instruction: format!(
            r#"Você é um especialista em mapear os recursos disponíveis na comunidade de {area} que podem ajudar a solucionar o problema,
cujos aspectos chave foram identificados como: {analise}.
Sua tarefa é usar a ferramenta de busca do Google (google_search) para encontrar informações sobre:
- Voluntários com habilidades relevantes para o problema.
- Serviços locais que podem oferecer suporte ou soluções.
- Organizações não governamentais e iniciativas comunitárias focadas em problemas semelhantes ou que atuam em {area}.
- Espaços ou equipamentos que poderiam ser utilizados para ações de solução.
Liste os tipos de recursos relevantes e, se possível, exemplos específicos encontrados na busca para a comunidade de {area}."#
        ),
        message: format!(
            "Recursos disponíveis em {area} para solucionar o problema (aspectos chave: {analise}): voluntários, serviços locais, ONGs, espaços."
        ),
    }
}

/// Stage 3: generate at least three community-actionable solutions.
pub fn generator_prompt(area: &str, problema: &str, analise: &str, recursos: &str) -> StagePrompt {
    StagePrompt {
        instruction: format!(
            r#"Você é um especialista em gerar soluções criativas e práticas para o problema "{problema}" na comunidade de {area},
considerando a análise do problema: {analise} e os recursos mapeados: {recursos}.
Sua tarefa é propor pelo menos 3 soluções distintas e viáveis que a própria comunidade poderia implementar, utilizando os recursos disponíveis.
Cada solução deve incluir:
- Uma breve descrição da ação.
- Os principais recursos necessários (identificados pelo agente mapeador ou outros que você considere relevantes).
- Os potenciais benefícios para a comunidade.
Seja criativo e pense em soluções que promovam a colaboração e o engajamento dos moradores."#
        ),
        message: format!(
            "Gerar 3 soluções para o problema '{problema}' em {area}, considerando a análise: {analise} e os recursos: {recursos}."
        ),
    }
}

/// Stage 4: assess feasibility and impact of the proposed solutions.
pub fn evaluator_prompt(problema: &str, area: &str, solucoes: &str) -> StagePrompt {
    StagePrompt {
        instruction: format!(
            r#"Você é um especialista em avaliar a viabilidade e o potencial impacto das seguintes soluções propostas para o problema "{problema}" na comunidade de {area}:
{solucoes}.
Para cada solução, sua tarefa é analisar:
- A probabilidade de sucesso com os recursos disponíveis.
- Os potenciais desafios ou obstáculos para a implementação.
- O impacto esperado na resolução do problema e no bem-estar da comunidade.
Apresente uma breve avaliação para cada solução, destacando seus pontos fortes e fracos."#
        ),
        message: format!(
            "Avaliar as soluções para o problema '{problema}' em {area}: {solucoes} (viabilidade, desafios, impacto)."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_embeds_problem_and_area_verbatim() {
        let prompt = analyzer_prompt("falta de coleta de lixo", "Bairro Central");
        assert!(prompt.instruction.contains("falta de coleta de lixo"));
        assert!(prompt.instruction.contains("Bairro Central"));
        assert!(prompt.message.contains("falta de coleta de lixo"));
        assert!(prompt.message.contains("Bairro Central"));
    }

    #[test]
    fn mapper_embeds_the_analysis_verbatim() {
        let analise = "1. Coleta irregular.\n2. Pontos de descarte clandestino.";
        let prompt = mapper_prompt("Bairro Central", analise);
        assert!(prompt.instruction.contains(analise));
        assert!(prompt.message.contains(analise));
    }

    #[test]
    fn generator_embeds_analysis_and_resources_verbatim() {
        let analise = "aspectos chave da análise";
        let recursos = "• ONG local\n• Praça comunitária";
        let prompt = generator_prompt("Bairro Central", "falta de coleta de lixo", analise, recursos);
        assert!(prompt.instruction.contains(analise));
        assert!(prompt.instruction.contains(recursos));
        assert!(prompt.instruction.contains("falta de coleta de lixo"));
    }

    #[test]
    fn evaluator_embeds_the_solutions_verbatim() {
        let solucoes = "Solução 1: mutirão de limpeza.\nSolução 2: ponto de coleta.";
        let prompt = evaluator_prompt("falta de coleta de lixo", "Bairro Central", solucoes);
        assert!(prompt.instruction.contains(solucoes));
        assert!(prompt.message.contains(solucoes));
    }
}
