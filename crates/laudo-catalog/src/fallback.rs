//! Embedded fallback catalogs.
//!
//! Identical in shape to the remote payloads, so the engines and composer
//! never notice which source answered. The TI-RADS tables carry the ACR
//! point weights; the BI-RADS tables are purely descriptive option lists.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{CatalogOption, OptionCatalog, System, fields, values};

/// Hard-coded catalog used while the remote store is unavailable.
pub struct StaticCatalog {
    fields: HashMap<&'static str, Vec<CatalogOption>>,
}

impl OptionCatalog for StaticCatalog {
    fn options(&self, field: &str) -> Option<&[CatalogOption]> {
        self.fields.get(field).map(Vec::as_slice)
    }
}

pub fn catalog(system: System) -> &'static StaticCatalog {
    match system {
        System::Tirads => thyroid(),
        System::Birads => breast(),
    }
}

pub fn thyroid() -> &'static StaticCatalog {
    static CATALOG: LazyLock<StaticCatalog> = LazyLock::new(|| {
        let mut map = HashMap::new();

        map.insert(
            fields::INDICACAO,
            vec![
                CatalogOption::new("rastreamento", "Rastreamento"),
                CatalogOption::new("nodulo_palpavel", "Nódulo palpável"),
                CatalogOption::new("seguimento", "Seguimento de nódulo conhecido"),
                CatalogOption::new("alteracao_laboratorial", "Alteração laboratorial"),
            ],
        );

        map.insert(
            fields::COMPOSICAO,
            vec![
                CatalogOption::weighted("cistica", "Cístico ou quase completamente cístico", 0),
                CatalogOption::weighted("espongiforme", "Espongiforme", 0),
                CatalogOption::weighted("mista", "Misto, cístico e sólido", 1),
                CatalogOption::weighted("solida", "Sólido ou quase completamente sólido", 2),
            ],
        );

        map.insert(
            fields::ECOGENICIDADE,
            vec![
                CatalogOption::weighted("anecoico", "Anecoico", 0),
                CatalogOption::weighted("hiperecogenico", "Hiperecogênico", 1),
                CatalogOption::weighted("isoecogenico", "Isoecogênico", 1),
                CatalogOption::weighted("hipoecogenico", "Hipoecogênico", 2),
                CatalogOption::weighted("muito_hipoecogenico", "Muito hipoecogênico", 3),
            ],
        );

        map.insert(
            fields::FORMATO,
            vec![
                CatalogOption::weighted("mais_largo_que_alto", "Mais largo do que alto", 0),
                CatalogOption::weighted("mais_alto_que_largo", "Mais alto do que largo", 3),
            ],
        );

        map.insert(
            fields::MARGENS,
            vec![
                CatalogOption::weighted("regulares", "Regulares", 0),
                CatalogOption::weighted("mal_definidas", "Mal definidas", 0),
                CatalogOption::weighted("lobuladas_ou_irregulares", "Lobuladas ou irregulares", 2),
                CatalogOption::weighted(
                    "extensao_extratireoidiana",
                    "Com extensão extratireoidiana",
                    3,
                ),
            ],
        );

        map.insert(
            fields::FOCOS,
            vec![
                CatalogOption::weighted("nenhum", "Nenhum ou artefato em cauda de cometa", 0),
                CatalogOption::weighted("macrocalcificacoes", "Macrocalcificações", 1),
                CatalogOption::weighted(
                    "calcificacoes_perifericas",
                    "Calcificações periféricas (em casca de ovo)",
                    2,
                ),
                CatalogOption::weighted("focos_puntiformes", "Focos ecogênicos puntiformes", 3),
            ],
        );

        map.insert(
            fields::LOCALIZACAO,
            vec![
                CatalogOption::new("lobo_direito", "lobo direito"),
                CatalogOption::new("lobo_esquerdo", "lobo esquerdo"),
                CatalogOption::new("istmo", "istmo"),
            ],
        );

        map.insert(
            fields::NOTAS,
            vec![
                CatalogOption::new(
                    "correlacao_clinica",
                    "Recomenda-se correlação com dados clínicos e laboratoriais.",
                ),
                CatalogOption::new(
                    "exame_comparativo_indisponivel",
                    "Exame comparativo não disponível para análise.",
                ),
            ],
        );

        StaticCatalog { fields: map }
    });
    &CATALOG
}

pub fn breast() -> &'static StaticCatalog {
    static CATALOG: LazyLock<StaticCatalog> = LazyLock::new(|| {
        let mut map = HashMap::new();

        map.insert(
            fields::INDICACAO,
            vec![
                CatalogOption::new("rastreamento", "Rastreamento mamário"),
                CatalogOption::new("mastalgia", "Mastalgia"),
                CatalogOption::new("nodulo_palpavel", "Nódulo palpável"),
                CatalogOption::new("descarga_papilar", "Descarga papilar"),
                CatalogOption::new("seguimento", "Seguimento de achado conhecido"),
                CatalogOption::new(
                    values::INDICACAO_MALIGNIDADE_COMPROVADA,
                    "Controle de malignidade comprovada por biópsia",
                ),
            ],
        );

        map.insert(
            fields::PARENQUIMA,
            vec![
                CatalogOption::new("adiposo", "predominantemente adiposo"),
                CatalogOption::new("fibroglandular_adiposo", "adiposo e fibroglandular"),
                CatalogOption::new("heterogeneo", "fibroglandular heterogêneo"),
                CatalogOption::new("denso", "predominantemente fibroglandular"),
            ],
        );

        map.insert(
            fields::CIRURGIA,
            vec![
                CatalogOption::new("setorectomia", "Setorectomia"),
                CatalogOption::new("quadrantectomia", "Quadrantectomia"),
                CatalogOption::new(values::CIRURGIA_MASTECTOMIA, "Mastectomia"),
                CatalogOption::new("mamoplastia", "Mamoplastia"),
            ],
        );

        map.insert(
            fields::RECONSTRUCAO,
            vec![
                CatalogOption::new("protese", "reconstrução com prótese"),
                CatalogOption::new("retalho_miocutaneo", "reconstrução com retalho miocutâneo"),
            ],
        );

        map.insert(
            fields::CISTO_TIPO,
            vec![
                CatalogOption::new(values::CISTO_SIMPLES, "Cisto simples"),
                CatalogOption::new(values::CISTO_MICROCISTOS_AGRUPADOS, "Microcistos agrupados"),
                CatalogOption::new(values::CISTO_COMPLICADO, "Cisto complicado"),
                CatalogOption::new(values::CISTO_COMPLEXO, "Cisto complexo"),
            ],
        );

        map.insert(
            fields::NODULO_FORMATO,
            vec![
                CatalogOption::new("oval", "oval"),
                CatalogOption::new("redondo", "redondo"),
                CatalogOption::new(values::FORMATO_IRREGULAR, "irregular"),
            ],
        );

        map.insert(
            fields::NODULO_MARGENS,
            vec![
                CatalogOption::new("circunscritas", "circunscritas"),
                CatalogOption::new(values::MARGENS_MICROLOBULADAS, "microlobuladas"),
                CatalogOption::new(values::MARGENS_INDISTINTAS, "indistintas"),
                CatalogOption::new(values::MARGENS_ESPICULADAS, "espiculadas"),
            ],
        );

        map.insert(
            fields::NODULO_ECOGENICIDADE,
            vec![
                CatalogOption::new("anecoico", "anecoico"),
                CatalogOption::new("hiperecogenico", "hiperecogênico"),
                CatalogOption::new("isoecogenico", "isoecogênico"),
                CatalogOption::new("hipoecogenico", "hipoecogênico"),
                CatalogOption::new("heterogeneo", "heterogêneo"),
            ],
        );

        map.insert(
            fields::NODULO_ACUSTICA,
            vec![
                CatalogOption::new("indiferente", "sem alterações acústicas posteriores"),
                CatalogOption::new("reforco", "com reforço acústico posterior"),
                CatalogOption::new(values::ACUSTICA_SOMBRA, "com sombra acústica posterior"),
            ],
        );

        map.insert(
            fields::ECTASIA_CONTEUDO,
            vec![
                CatalogOption::new(values::CONTEUDO_ANECOICO, "conteúdo anecoico"),
                CatalogOption::new(values::CONTEUDO_ECOGENICO, "conteúdo ecogênico"),
            ],
        );

        map.insert(
            fields::DISTORCAO_RELACAO,
            vec![
                CatalogOption::new(
                    values::RELACAO_SITIO_CIRURGICO,
                    "em correspondência com sítio cirúrgico",
                ),
                CatalogOption::new(
                    values::RELACAO_FORA_SITIO_CIRURGICO,
                    "sem relação com sítio cirúrgico",
                ),
            ],
        );

        map.insert(
            fields::DISTORCAO_ASPECTO,
            vec![
                CatalogOption::new("focal", "de aspecto focal"),
                CatalogOption::new(values::ASPECTO_ESPICULADO, "com espiculação"),
            ],
        );

        map.insert(
            fields::IMPLANTE_INTEGRIDADE,
            vec![
                CatalogOption::new(values::IMPLANTE_INTEGRO, "íntegros"),
                CatalogOption::new(
                    values::IMPLANTE_ROTURA_INTRACAPSULAR,
                    "com sinais de rotura intracapsular",
                ),
                CatalogOption::new(
                    values::IMPLANTE_ROTURA_EXTRACAPSULAR,
                    "com sinais de rotura extracapsular",
                ),
            ],
        );

        map.insert(
            fields::LINFONODO_PADRAO,
            vec![
                CatalogOption::new("habitual", "de aspecto habitual preservado"),
                CatalogOption::new("reacional", "de aspecto reacional"),
                CatalogOption::new(
                    values::LINFONODO_ATIPICO,
                    "com perda do padrão morfológico habitual",
                ),
            ],
        );

        map.insert(
            fields::LOCALIZACAO,
            vec![
                CatalogOption::new("quadrante_superolateral", "no quadrante superolateral"),
                CatalogOption::new("quadrante_superomedial", "no quadrante superomedial"),
                CatalogOption::new("quadrante_inferolateral", "no quadrante inferolateral"),
                CatalogOption::new("quadrante_inferomedial", "no quadrante inferomedial"),
                CatalogOption::new("retroareolar", "na região retroareolar"),
                CatalogOption::new("prolongamento_axilar", "no prolongamento axilar"),
            ],
        );

        map.insert(
            fields::NOTAS,
            vec![
                CatalogOption::new(
                    "correlacao_clinica",
                    "Recomenda-se correlação com os dados clínicos.",
                ),
                CatalogOption::new(
                    "exame_comparativo_indisponivel",
                    "Exame comparativo não disponível para análise.",
                ),
                CatalogOption::new(
                    "limitacao_tecnica",
                    "Exame com limitação técnica pela biotipia.",
                ),
            ],
        );

        StaticCatalog { fields: map }
    });
    &CATALOG
}
