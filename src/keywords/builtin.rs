use crate::error::Result;

use super::{KeywordEntry, KeywordStore};

/// Returns the built-in FAQ table.
pub fn builtin_keywords() -> Result<KeywordStore> {
    let entries = vec![
        KeywordEntry::new(
            "plr",
            "💰 PLR (Participação nos Lucros e Resultados)\n\n\
             A PLR é composta pela regra básica e pela parcela adicional previstas na CCT, \
             além do programa próprio de cada banco definido em ACT.\n\
             A primeira parcela é antecipada no segundo semestre e o restante é pago \
             após a divulgação do balanço anual.\n\n\
             Confira os percentuais e tetos vigentes no acordo mais recente ou procure o sindicato.",
        ),
        KeywordEntry::new(
            "licença saúde",
            "🏥 Licença saúde\n\n\
             Os primeiros 15 dias de afastamento são pagos pelo banco; a partir do 16º dia, \
             o pagamento passa ao INSS.\n\
             A CCT garante complementação salarial durante o afastamento por doença, \
             nas condições previstas na cláusula específica.\n\n\
             Guarde atestados e laudos e procure o sindicato em caso de negativa do INSS.",
        ),
        KeywordEntry::new(
            "licença maternidade",
            "👶 Licença maternidade\n\n\
             A licença é de 180 dias para bancárias, com a prorrogação garantida pela CCT.\n\
             A CCT também prevê estabilidade provisória após o retorno.\n\n\
             Consulte o sindicato para os detalhes do seu banco.",
        ),
        KeywordEntry::new(
            "campanha salarial",
            "📢 Campanha salarial\n\n\
             A campanha nacional negocia a CCT da categoria com a Fenaban, \
             incluindo reajuste de salários, pisos, vales e PLR.\n\
             Os acordos específicos de cada banco (ACTs) são negociados em paralelo.\n\n\
             Acompanhe as assembleias e participe das decisões da categoria.",
        ),
        KeywordEntry::new(
            "filiação",
            "✊ Filiação\n\n\
             Filiar-se ao sindicato fortalece a negociação coletiva e garante acesso \
             à assessoria jurídica e aos convênios da entidade.\n\
             A filiação pode ser feita na sede do sindicato ou com um dirigente sindical.",
        ),
        KeywordEntry::new(
            "vales",
            "🍽️ Vales\n\n\
             A CCT garante auxílio-refeição e auxílio-cesta alimentação, \
             além da 13ª cesta paga no fim do ano.\n\
             Os valores são reajustados a cada campanha salarial.\n\n\
             Confira os valores atualizados no acordo mais recente.",
        ),
        KeywordEntry::new(
            "horas extras",
            "⏰ Horas extras\n\n\
             A jornada bancária é de 6 horas diárias; o que exceder deve ser pago \
             com o adicional previsto na CCT.\n\
             Registre corretamente o ponto e guarde comprovantes da jornada realizada.\n\n\
             Em caso de irregularidade, procure o sindicato.",
        ),
    ];

    KeywordStore::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let store = builtin_keywords().expect("built-in table must validate");
        for keyword in ["plr", "licença saúde", "campanha salarial", "filiação", "vales"] {
            assert!(store.get(keyword).is_some(), "missing {keyword}");
        }
    }
}
