// src/session.rs

use crate::models::{Cliente, Promocao, Servico};
use crate::services::carga_service::{CargaAdmin, CargaCliente};

// Exatamente um papel vale por vez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Papel {
    #[default]
    Visitante,
    Cliente,
    Admin,
}

// O que a resolução de identidade decidiu sobre quem está logando.
#[derive(Debug, Clone, PartialEq)]
pub struct Identidade {
    pub papel: Papel,
    pub usuario: Cliente,
}

// Todo o estado da sessão do portal, em memória, zerado no logout.
// Só é mutado de um lugar (o laço principal), então nada de locks.
#[derive(Debug, Clone, Default)]
pub struct Sessao {
    pub papel: Papel,
    pub usuario: Option<Cliente>,
    pub carregando: bool,
    pub erro: Option<String>,

    // Coleções do painel do cliente.
    // `promocoes` é compartilhada: o painel admin recarrega nela também.
    pub servicos: Vec<Servico>,
    pub promocoes: Vec<Promocao>,

    // Coleções do painel administrativo
    pub todos_clientes: Vec<Cliente>,
    pub todos_servicos: Vec<Servico>,

    // Época da sessão: toda troca de papel incrementa. Respostas de cargas
    // disparadas numa época anterior são descartadas na aplicação.
    epoca: u64,
}

impl Sessao {
    pub fn nova() -> Self {
        Self::default()
    }

    pub fn epoca(&self) -> u64 {
        self.epoca
    }

    // Zera tudo e invalida as cargas em voo.
    fn reiniciar(&mut self) {
        self.papel = Papel::Visitante;
        self.usuario = None;
        self.carregando = false;
        self.erro = None;
        self.servicos.clear();
        self.promocoes.clear();
        self.todos_clientes.clear();
        self.todos_servicos.clear();
        self.epoca += 1;
    }

    // Entrar num papel sempre passa pelo reset completo primeiro, então
    // um login de cliente nunca enxerga sobras do painel admin (e vice-versa).
    pub fn entrar(&mut self, identidade: Identidade) {
        self.reiniciar();
        self.papel = identidade.papel;
        self.usuario = Some(identidade.usuario);
    }

    pub fn logout(&mut self) {
        self.reiniciar();
    }

    // Aplica o resultado de uma carga de cliente, slot por slot.
    // Falha num fetch não impede o outro de popular; só fica no log.
    pub fn aplicar_carga_cliente(&mut self, epoca: u64, carga: CargaCliente) {
        if epoca != self.epoca {
            tracing::warn!(
                "Carga de cliente descartada: sessão mudou (época {} != {})",
                epoca,
                self.epoca
            );
            return;
        }

        match carga.servicos {
            Ok(servicos) => self.servicos = servicos,
            Err(erro) => tracing::warn!("Erro ao carregar serviços: {}", erro),
        }
        match carga.promocoes {
            Ok(promocoes) => self.promocoes = promocoes,
            Err(erro) => tracing::warn!("Erro ao carregar promoções: {}", erro),
        }
    }

    pub fn aplicar_carga_admin(&mut self, epoca: u64, carga: CargaAdmin) {
        if epoca != self.epoca {
            tracing::warn!(
                "Carga admin descartada: sessão mudou (época {} != {})",
                epoca,
                self.epoca
            );
            return;
        }

        match carga.clientes {
            Ok(clientes) => self.todos_clientes = clientes,
            Err(erro) => tracing::warn!("Erro ao carregar clientes: {}", erro),
        }
        match carga.servicos {
            Ok(servicos) => self.todos_servicos = servicos,
            Err(erro) => tracing::warn!("Erro ao carregar serviços: {}", erro),
        }
        match carga.promocoes {
            Ok(promocoes) => self.promocoes = promocoes,
            Err(erro) => tracing::warn!("Erro ao carregar promoções: {}", erro),
        }
    }
}
