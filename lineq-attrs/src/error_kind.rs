use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The tags of the `error` attribute.
#[derive(Debug)]
pub struct ErrorArgs {
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the tags from `#[error(message = .., labels = [..], help = ..)]`. The `message` tag
    /// is required; `ident` is the struct, used to place the error if it is missing.
    fn from_attr(attr: Option<&Attribute>, ident: &Ident) -> Result<Self> {
        let tags = match attr {
            Some(attr) => attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?,
            None => Punctuated::new(),
        };

        let (mut message, mut labels, mut help) = (None, None, None);
        for tag in tags {
            let slot = match tag.path.get_ident().map(Ident::to_string).as_deref() {
                Some("message") => &mut message,
                Some("labels") => &mut labels,
                Some("help") => &mut help,
                _ => return Err(syn::Error::new(tag.path.span(), "expected `message`, `labels`, or `help`")),
            };
            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new(tag.path.span(), "this tag is given more than once"));
            }
        }

        let message = message.ok_or_else(|| syn::Error::new_spanned(
            ident,
            "missing `message` tag in `#[error(...)]` attribute",
        ))?;
        Ok(Self { message, labels, help })
    }
}

/// Binds the named fields of `self` to local variables, so the tags can use them.
fn bind_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let names = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { let #ident { #(#names),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! {
            ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
        },
        Fields::Unit => TokenStream2::new(),
    }
}

/// A struct that `ErrorKind` is derived for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let attr = item.attrs.iter().find(|attr| attr.path().is_ident("error"));
        let args = ErrorArgs::from_attr(attr, &item.ident)?;

        Ok(Self { name: item.ident, fields: item.fields, args })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = bind_fields(&self.name, &self.fields);
        let message = &self.args.message;
        let labels = match &self.args.labels {
            Some(labels) => labels.to_token_stream(),
            None => quote! { [""] },
        };
        let help = self.args.help.as_ref().map(|help| quote! { report = report.with_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bindings

                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(lineq_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);

                #help
                report.finish()
            }
        });
    }
}
