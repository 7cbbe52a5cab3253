//! Services, testimonials, conditions and FAQs.

use super::{Condition, Faq, Service, Testimonial};

pub static SERVICES: &[Service] = &[
    Service {
        id: "fisioterapia-regenerativa",
        title: "Fisioterapia Regenerativa",
        description: "Tratamento avançado focado na causa raiz da dor. Utilizamos tecnologias que aceleram a biologia natural do corpo para reparar tecidos, tendões e articulações desgastadas, evitando cirurgias desnecessárias.",
        benefits: &[
            "Ideal para Hérnia de Disco e Artrose",
            "Regeneração de cartilagem e tendões",
            "Alívio imediato de dores crônicas",
        ],
        image: None,
        icon: "fa-user-injured",
        is_new: false,
    },
    Service {
        id: "ozonioterapia",
        title: "Ozonioterapia Medicinal",
        description: "O poder do Ozônio Medicinal para combater inflamações severas e fortalecer a imunidade. Tratamento integrativo padrão ouro para dores na coluna, fibromialgia e feridas de difícil cicatrização.",
        benefits: &[
            "Potente ação anti-inflamatória e analgésica",
            "Combate vírus, fungos e bactérias",
            "Melhora a circulação e oxigenação celular",
        ],
        image: None,
        icon: "fa-lungs",
        is_new: false,
    },
    Service {
        id: "terapia-neural",
        title: "Terapia Neural",
        description: "Técnica alemã que reequilibra o sistema nervoso autônomo. Indicada para quem sofre de dores persistentes que não respondem a tratamentos convencionais, ansiedade, insônia e cicatrizes dolorosas.",
        benefits: &[
            "Desbloqueio de interferências nervosas",
            "Tratamento eficaz para enxaquecas e cicatrizes",
            "Regulação do sono e estresse",
        ],
        image: None,
        icon: "fa-brain",
        is_new: false,
    },
    Service {
        id: "photon-dome",
        title: "Bio Aquecedor Photon Dome II",
        description: "Tecnologia japonesa de emissão de raios infravermelhos longos. Promove uma desintoxicação profunda, acelera o metabolismo e auxilia no emagrecimento saudável e redução de medidas.",
        benefits: &[
            "Detoxificação e queima calórica",
            "Redução de ácido lático e dores musculares",
            "Melhora da elasticidade da pele",
        ],
        image: None,
        icon: "fa-temperature-arrow-up",
        is_new: true,
    },
    Service {
        id: "drenagem-linfatica",
        title: "Drenagem Linfática Manual",
        description: "Método comprovado para eliminar a retenção de líquidos, reduzir o inchaço corporal e combater a celulite. Essencial no pós-operatório de cirurgias plásticas para uma recuperação rápida.",
        benefits: &[
            "Eliminação de toxinas e inchaço",
            "Recuperação acelerada de pós-operatório",
            "Redução visível de medidas",
        ],
        image: None,
        icon: "fa-water",
        is_new: false,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Maria Oliveira",
        treatment: "Ozonioterapia para Coluna",
        text: "Eu tinha uma hérnia de disco que me impedia de andar. Com a Ozonioterapia da Dra. Célia, evitei a cirurgia e hoje vivo sem dor. O atendimento em Curitiba é impecável!",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Carlos Mendes",
        treatment: "Fisioterapia Regenerativa",
        text: "Já tinha tentado de tudo para minha artrose no joelho. A Fisioterapia Regenerativa foi a única que devolveu minha mobilidade. Profissionais de alta performance!",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Ana Costa",
        treatment: "Drenagem e Estética",
        text: "O Photon Dome é incrível para desinchar. A clínica no Fazendinha é super aconchegante e fácil de estacionar. Recomendo para todas as minhas amigas.",
        rating: 5,
    },
];

pub static CONDITIONS: &[Condition] = &[
    Condition { name: "Hérnia de Disco", icon: "fa-compact-disc" },
    Condition { name: "Dor no Nervo Ciático", icon: "fa-bolt" },
    Condition { name: "Artrose e Desgaste", icon: "fa-bone" },
    Condition { name: "Fibromialgia", icon: "fa-person-cane" },
    Condition { name: "Dores na Coluna (Lombar/Cervical)", icon: "fa-user-injured" },
    Condition { name: "Tendinites e Bursites", icon: "fa-fire" },
    Condition { name: "Ansiedade e Insônia", icon: "fa-cloud-moon" },
    Condition { name: "Enxaqueca Crônica", icon: "fa-head-side-virus" },
    Condition { name: "Recuperação Pós-Cirúrgica", icon: "fa-user-nurse" },
    Condition { name: "Celulite e Gordura Localizada", icon: "fa-person-dress" },
];

pub static FAQS: &[Faq] = &[
    Faq {
        question: "Para quem é indicada a Ozonioterapia?",
        answer: "A Ozonioterapia é indicada para pacientes com dores crônicas, inflamações (como artrite e artrose), problemas circulatórios, feridas que não cicatrizam e baixa imunidade. É um tratamento seguro e natural, realizado pela Dra. Célia com protocolos rigorosos.",
    },
    Faq {
        question: "A Fisioterapia Regenerativa substitui a cirurgia?",
        answer: "Em muitos casos de hérnia de disco, lesões de tendão e desgastes articulares, a Fisioterapia Regenerativa consegue reparar o tecido e eliminar a dor, evitando a necessidade de procedimentos cirúrgicos invasivos.",
    },
    Faq {
        question: "Como funciona a consulta de avaliação?",
        answer: "Na sua primeira visita, realizamos uma análise detalhada do seu histórico e sintomas. Identificamos a causa raiz do problema e montamos um plano de tratamento personalizado, combinando técnicas como Terapia Neural e Ozônio para resultados mais rápidos.",
    },
    Faq {
        question: "Aceitam planos de saúde?",
        answer: "Trabalhamos com sistema de reembolso assistido. Você realiza o tratamento particular com a qualidade premium que merece, e nós fornecemos toda a documentação para que você solicite o reembolso junto ao seu convênio.",
    },
    Faq {
        question: "Onde a Clínica D'Cellyss está localizada?",
        answer: "Estamos localizados no bairro Fazendinha em Curitiba, na Rua Martins Fontes, 175 (Shop Megave, Loja 17). Temos estacionamento fácil e atendemos pacientes de toda a região metropolitana.",
    },
];
