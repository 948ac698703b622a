// src/view.rs

use std::fmt::Write as _;

use crate::common::formato::{formatar_cpf, formatar_data, formatar_valor};
use crate::models::{Promocao, Servico};
use crate::session::{Papel, Sessao};

// Abaixo desse tanto de dias de seguro a gente destaca o aviso.
const DIAS_SEGURO_ALERTA: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tela {
    Login,
    PainelAdmin,
    PainelCliente,
}

// Despacho puro: a tela é função só do papel da sessão, sem efeito colateral.
pub fn tela_para(sessao: &Sessao) -> Tela {
    match sessao.papel {
        Papel::Visitante => Tela::Login,
        Papel::Admin => Tela::PainelAdmin,
        Papel::Cliente => Tela::PainelCliente,
    }
}

pub fn render(sessao: &Sessao) -> String {
    match tela_para(sessao) {
        Tela::Login => render_login(sessao),
        Tela::PainelAdmin => render_painel_admin(sessao),
        Tela::PainelCliente => render_painel_cliente(sessao),
    }
}

fn render_login(sessao: &Sessao) -> String {
    let mut tela = String::new();
    let _ = writeln!(tela, "\n📱 Snap Cell Store");
    let _ = writeln!(tela, "Acesse sua conta com seu CPF");
    if let Some(erro) = &sessao.erro {
        let _ = writeln!(tela, "❌ {}", erro);
    }
    if sessao.carregando {
        let _ = writeln!(tela, "Carregando...");
    }
    tela
}

fn render_painel_admin(sessao: &Sessao) -> String {
    let mut tela = String::new();
    let _ = writeln!(tela, "\n🔧 Painel Administrativo - Snap Cell Store");

    let _ = writeln!(tela, "\n── Clientes ({}) ──", sessao.todos_clientes.len());
    for cliente in &sessao.todos_clientes {
        let _ = write!(
            tela,
            " • {} | CPF: {}",
            cliente.nome,
            formatar_cpf(&cliente.cpf)
        );
        if let Some(telefone) = &cliente.telefone {
            let _ = write!(tela, " | Tel: {}", telefone);
        }
        if let Some(email) = &cliente.email {
            let _ = write!(tela, " | Email: {}", email);
        }
        let _ = writeln!(tela);
    }

    let _ = writeln!(tela, "\n── Serviços ({}) ──", sessao.todos_servicos.len());
    for servico in &sessao.todos_servicos {
        let _ = writeln!(
            tela,
            " • {} — {} | CPF: {} | Valor: {}{}",
            servico.nome_aparelho,
            servico.tipo_servico,
            formatar_cpf(&servico.cliente_cpf),
            formatar_valor(&servico.valor_servico),
            if servico.tem_seguro {
                " | 🛡 Com Seguro"
            } else {
                ""
            }
        );
    }

    let _ = writeln!(tela, "\n── Promoções ({}) ──", sessao.promocoes.len());
    for promocao in &sessao.promocoes {
        let _ = writeln!(
            tela,
            " • {} [{}] | Válida até: {}{}",
            promocao.titulo,
            promocao.desconto,
            formatar_data(&promocao.data_validade),
            if promocao.ativa { "" } else { " | (inativa)" }
        );
    }

    tela
}

fn render_painel_cliente(sessao: &Sessao) -> String {
    let mut tela = String::new();
    let nome = sessao
        .usuario
        .as_ref()
        .map(|usuario| usuario.nome.as_str())
        .unwrap_or("cliente");
    let _ = writeln!(tela, "\n👋 Olá, {}!", nome);
    let _ = writeln!(tela, "Snap Cell Store - Seus serviços e informações");

    let _ = writeln!(tela, "\n── Meus Serviços ──");
    if sessao.servicos.is_empty() {
        let _ = writeln!(tela, "Nenhum serviço encontrado");
        let _ = writeln!(
            tela,
            "Quando você realizar um serviço, ele aparecerá aqui."
        );
    } else {
        for servico in &sessao.servicos {
            render_servico_do_cliente(&mut tela, servico);
        }
    }

    let _ = writeln!(tela, "\n── Promoções ──");
    if sessao.promocoes.is_empty() {
        let _ = writeln!(tela, "Nenhuma promoção ativa");
        let _ = writeln!(
            tela,
            "Fique atento! Novas ofertas podem aparecer a qualquer momento."
        );
    } else {
        for promocao in &sessao.promocoes {
            render_promocao(&mut tela, promocao);
        }
    }

    tela
}

fn render_servico_do_cliente(tela: &mut String, servico: &Servico) {
    let _ = writeln!(tela, " • {} ({})", servico.nome_aparelho, servico.cor);
    let _ = writeln!(
        tela,
        "   IMEI: {} | Serviço: {}",
        servico.imei, servico.tipo_servico
    );
    let _ = writeln!(
        tela,
        "   Data: {} | Garantia até: {}",
        formatar_data(&servico.data_servico),
        formatar_data(&servico.data_fim_garantia)
    );
    let _ = writeln!(
        tela,
        "   Valor pago: {}",
        formatar_valor(&servico.valor_servico)
    );

    if servico.tem_seguro {
        let _ = write!(
            tela,
            "   🛡 Seguro Ativo | Valor do seguro: {}",
            formatar_valor(&servico.valor_seguro)
        );
        if let Some(dias) = servico.dias_seguro_restantes {
            if dias <= DIAS_SEGURO_ALERTA {
                let _ = write!(tela, " | ⚠️ Dias restantes: {} dias", dias);
            } else {
                let _ = write!(tela, " | Dias restantes: {} dias", dias);
            }
        }
        let _ = writeln!(tela);
    } else {
        let _ = writeln!(tela, "   Sem seguro");
    }
}

fn render_promocao(tela: &mut String, promocao: &Promocao) {
    let _ = writeln!(tela, " • {} [{}]", promocao.titulo, promocao.desconto);
    if !promocao.descricao.is_empty() {
        let _ = writeln!(tela, "   {}", promocao.descricao);
    }
    let _ = writeln!(
        tela,
        "   Válida até: {}",
        formatar_data(&promocao.data_validade)
    );
}
