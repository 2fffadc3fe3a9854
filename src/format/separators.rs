// Priority-ordered delimiter tables, most structural first.
// Every table ends with the generic paragraph / line / word separators.

pub const PLAINTEXT: &[&str] = &["\n\n", "\n", " "];

pub const MARKDOWN: &[&str] = &[
    "\n# ",
    "\n## ",
    "\n### ",
    "\n#### ",
    "\n##### ",
    "\n###### ",
    "\n```\n",
    "\n***\n",
    "\n---\n",
    "\n___\n",
    "\n\n",
    "\n",
    " ",
];

pub const ELIXIR: &[&str] = &[
    "\ndefmodule ",
    "\ndefprotocol ",
    "\ndefimpl ",
    "\n  defmodule ",
    "\n  @moduledoc ",
    "\n  @doc ",
    "\n  def ",
    "\n  defp ",
    "\n  defmacro ",
    "\n  defmacrop ",
    "\n  defstruct ",
    "\n  defguard ",
    "\n    case ",
    "\n    cond ",
    "\n    with ",
    "\n    if ",
    "\n    unless ",
    "\n\n",
    "\n",
    " ",
];

pub const PYTHON: &[&str] = &[
    "\nclass ",
    "\ndef ",
    "\nasync def ",
    "\n    def ",
    "\n    async def ",
    "\n\tdef ",
    "\n\n",
    "\n",
    " ",
];

pub const RUBY: &[&str] = &[
    "\nclass ",
    "\nmodule ",
    "\ndef ",
    "\n  def ",
    "\n  class ",
    "\nif ",
    "\nunless ",
    "\nwhile ",
    "\nfor ",
    "\ndo ",
    "\nbegin ",
    "\nrescue ",
    "\n\n",
    "\n",
    " ",
];

pub const PHP: &[&str] = &[
    "\nnamespace ",
    "\nuse ",
    "\nclass ",
    "\ninterface ",
    "\ntrait ",
    "\nfunction ",
    "\n    public function ",
    "\n    protected function ",
    "\n    private function ",
    "\nif ",
    "\nforeach ",
    "\nwhile ",
    "\ndo ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
];

pub const JAVASCRIPT: &[&str] = &[
    "\nexport ",
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nclass ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
];

pub const TYPESCRIPT: &[&str] = &[
    "\nexport ",
    "\nenum ",
    "\ninterface ",
    "\ntype ",
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nclass ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
];

pub const VUE: &[&str] = &[
    "\n<template",
    "\n<script",
    "\n<style",
    "\nexport default ",
    "\nfunction ",
    "\nconst ",
    "\n<div",
    "\n<p",
    "\n<ul",
    "\n<li",
    "\n\n",
    "\n",
    " ",
];

pub const RUST: &[&str] = &[
    "\nmod ",
    "\npub mod ",
    "\nimpl ",
    "\ntrait ",
    "\npub trait ",
    "\nstruct ",
    "\npub struct ",
    "\nenum ",
    "\npub enum ",
    "\nfn ",
    "\npub fn ",
    "\n    fn ",
    "\n    pub fn ",
    "\nconst ",
    "\nlet ",
    "\nif ",
    "\nwhile ",
    "\nfor ",
    "\nloop ",
    "\nmatch ",
    "\n\n",
    "\n",
    " ",
];

pub const GO: &[&str] = &[
    "\nfunc ",
    "\ntype ",
    "\nvar ",
    "\nconst ",
    "\nif ",
    "\nfor ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
];

pub const JAVA: &[&str] = &[
    "\nclass ",
    "\npublic class ",
    "\ninterface ",
    "\nenum ",
    "\n    public ",
    "\n    protected ",
    "\n    private ",
    "\n    static ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
];

pub const C: &[&str] = &[
    "\nstruct ",
    "\ntypedef ",
    "\nenum ",
    "\nstatic ",
    "\nvoid ",
    "\nint ",
    "\nchar ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
];

pub const CPP: &[&str] = &[
    "\nclass ",
    "\nnamespace ",
    "\ntemplate ",
    "\nstruct ",
    "\nvoid ",
    "\nint ",
    "\nfloat ",
    "\ndouble ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
];

pub const HTML: &[&str] = &[
    "<body",
    "<div",
    "<p",
    "<br",
    "<li",
    "<h1",
    "<h2",
    "<h3",
    "<h4",
    "<h5",
    "<h6",
    "<span",
    "<table",
    "<tr",
    "<td",
    "<th",
    "<ul",
    "<ol",
    "<header",
    "<footer",
    "<nav",
    "<head",
    "<style",
    "<script",
    "<meta",
    "<title",
    "\n\n",
    "\n",
    " ",
];
